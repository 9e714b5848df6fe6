// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/mod.rs
// The standard operation library

pub mod arithmetic;
pub mod flatten;
pub mod sequence;
pub mod string;

use crate::ast::{OperationDef, Shape, Value};
use crate::core::error::EvalError;
use crate::rewrite::Engine;

/// Every standard definition, in registration order
pub fn definitions() -> Vec<OperationDef> {
    let mut defs = sequence::definitions();
    defs.extend(arithmetic::definitions());
    defs.extend(string::definitions());
    defs.extend(flatten::definitions());
    defs
}

pub fn install(engine: &mut Engine) -> Result<(), EvalError> {
    for def in definitions() {
        engine.register(def)?;
    }
    Ok(())
}

/// Position of `target` in `seq`, or -1 when it does not occur.
pub fn index_of(engine: &Engine, seq: &Value, target: &Value) -> Result<i64, EvalError> {
    match engine.evaluate("IndexOf", &[seq.clone(), target.clone()]) {
        Ok(Value::Num(i)) => Ok(i as i64),
        Ok(other) => Err(EvalError::shape(Shape::Num, &other)),
        Err(EvalError::NotFound { .. }) => Ok(-1),
        Err(e) => Err(e),
    }
}

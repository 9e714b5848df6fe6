// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/mod.rs
// The operation catalog and its entry points

pub mod distribute;
pub mod evaluator;
pub mod validate;

pub use distribute::*;
pub use validate::validate;

use crate::ast::{OperationDef, Value};
use crate::core::error::EvalError;
use crate::library;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A catalog of registered operations.
///
/// Definitions are validated on the way in and never change afterwards, so a
/// shared `&Engine` can serve any number of independent evaluations.
#[derive(Debug, Default)]
pub struct Engine {
    catalog: HashMap<String, OperationDef>,
}

impl Engine {
    /// An engine with nothing registered
    pub fn new() -> Self {
        Engine {
            catalog: HashMap::new(),
        }
    }

    /// An engine preloaded with the standard operation library
    pub fn with_library() -> Result<Self, EvalError> {
        let mut engine = Engine::new();
        library::install(&mut engine)?;
        Ok(engine)
    }

    /// The process-wide standard engine, built on first use
    pub fn standard() -> Result<&'static Engine, EvalError> {
        static STANDARD: OnceLock<Result<Engine, EvalError>> = OnceLock::new();
        STANDARD
            .get_or_init(Engine::with_library)
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Add an operation to the catalog.
    /// Fails on a name clash or a definition that could never apply as written.
    pub fn register(&mut self, def: OperationDef) -> Result<(), EvalError> {
        if self.catalog.contains_key(&def.name) {
            return Err(EvalError::DuplicateOperation(def.name));
        }
        validate(&def)?;
        debug!(
            "registered {} ({} params, {} clauses)",
            def.name,
            def.arity(),
            def.clauses.len()
        );
        self.catalog.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn lookup(&self, op: &str) -> Option<&OperationDef> {
        self.catalog.get(op)
    }

    pub fn contains(&self, op: &str) -> bool {
        self.catalog.contains_key(op)
    }

    /// Registered operations in name order
    pub fn operations(&self) -> Vec<&OperationDef> {
        let mut defs: Vec<_> = self.catalog.values().collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }
}

/// Evaluate `op` against the standard engine
pub fn evaluate(op: &str, args: &[Value]) -> Result<Value, EvalError> {
    Engine::standard()?.evaluate(op, args)
}

// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/error.rs
// Error taxonomy shared by registration, evaluation and distribution

use crate::ast::{FailKind, OpName, Shape, Value};
use thiserror::Error;

/// Everything that can go wrong in the engine. Nothing is swallowed: every
/// failure reaches the caller of `register`, `evaluate` or `distribute`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown operation: {0}")]
    UnknownOperation(OpName),

    #[error("no clause of {op} matches {}", fmt_args(.args))]
    NoMatchingClause { op: OpName, args: Vec<Value> },

    #[error("{op} of an empty sequence: {}", fmt_args(.args))]
    EmptySequence { op: OpName, args: Vec<Value> },

    #[error("{op} would go below zero: {}", fmt_args(.args))]
    NegativeResult { op: OpName, args: Vec<Value> },

    #[error("{op} exhausted its input: {}", fmt_args(.args))]
    NotFound { op: OpName, args: Vec<Value> },

    #[error("no handling registered for tag #{tag}")]
    UnhandledTag { tag: String },

    #[error("malformed pattern in {op}, clause {clause}: {reason}")]
    MalformedPattern {
        op: OpName,
        clause: usize,
        reason: String,
    },

    #[error("operation already registered: {0}")]
    DuplicateOperation(OpName),

    #[error("expected a {expected} value, found {found}")]
    ShapeMismatch { expected: Shape, found: Value },
}

impl EvalError {
    /// Error for a `Fail` body reached while evaluating `op` on `args`
    pub fn declared(kind: FailKind, op: &str, args: &[Value]) -> Self {
        let op = op.to_string();
        let args = args.to_vec();
        match kind {
            FailKind::EmptySequence => EvalError::EmptySequence { op, args },
            FailKind::NegativeResult => EvalError::NegativeResult { op, args },
            FailKind::NotFound => EvalError::NotFound { op, args },
        }
    }

    /// Name of the error variant, for hosts that report the kind separately
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::UnknownOperation(_) => "UnknownOperation",
            EvalError::NoMatchingClause { .. } => "NoMatchingClause",
            EvalError::EmptySequence { .. } => "EmptySequence",
            EvalError::NegativeResult { .. } => "NegativeResult",
            EvalError::NotFound { .. } => "NotFound",
            EvalError::UnhandledTag { .. } => "UnhandledTag",
            EvalError::MalformedPattern { .. } => "MalformedPattern",
            EvalError::DuplicateOperation(_) => "DuplicateOperation",
            EvalError::ShapeMismatch { .. } => "ShapeMismatch",
        }
    }

    pub fn shape(expected: Shape, found: &Value) -> Self {
        EvalError::ShapeMismatch {
            expected,
            found: found.clone(),
        }
    }
}

fn fmt_args(args: &[Value]) -> String {
    let parts: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    format!("⟨{}⟩", parts.join(", "))
}

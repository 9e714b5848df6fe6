// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// Type-level rewrite engine library

pub mod ast;
pub mod core;
pub mod library;
pub mod rewrite;
pub mod syntax;

// Re-export commonly used items
pub use ast::{Clause, FailKind, OpName, OperationDef, Pattern, Shape, Term, Text, Value, Var};
pub use crate::core::error::EvalError;
pub use crate::core::matcher::{match_clause, match_pattern, Bindings};
pub use crate::core::subst::substitute;
pub use library::index_of;
pub use rewrite::{evaluate, validate, Distribution, Engine, Handling};
pub use syntax::{parse_command_str, parse_value_str, Command};

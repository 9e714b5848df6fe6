// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/mod.rs
// Surface syntax: literal parsing and pretty printing

pub mod parser;
pub mod pretty;

pub use parser::{parse_command_str, parse_value_str, Command};

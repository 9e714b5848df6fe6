// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/mod.rs
// Matching, substitution and errors

pub mod error;
pub mod matcher;
pub mod subst;

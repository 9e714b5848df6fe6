// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/validate.rs
// Registration-time checks on operation definitions

use crate::ast::*;
use crate::core::error::EvalError;
use std::collections::HashSet;

/// Reject a definition with a clause that can never apply as written:
/// wrong arity, a pattern whose shape disagrees with its parameter, split
/// text that is never bound, or a body that uses an unbound variable.
pub fn validate(def: &OperationDef) -> Result<(), EvalError> {
    if def.clauses.is_empty() {
        return Err(malformed(def, 0, "operation has no clauses".to_string()));
    }

    for (i, clause) in def.clauses.iter().enumerate() {
        check_clause(def, i, clause)?;
    }
    Ok(())
}

fn check_clause(def: &OperationDef, i: usize, clause: &Clause) -> Result<(), EvalError> {
    if clause.patterns.len() != def.arity() {
        return Err(malformed(
            def,
            i,
            format!(
                "{} patterns for {} parameters",
                clause.patterns.len(),
                def.arity()
            ),
        ));
    }

    for (pattern, param) in clause.patterns.iter().zip(&def.params) {
        if !param.admits(pattern.shape()) {
            return Err(malformed(
                def,
                i,
                format!("{} can never match a {} argument", pattern, param),
            ));
        }
        if let Pattern::InfixSplit(_, Text::Lit(m), _) = pattern {
            if m.is_empty() {
                return Err(malformed(def, i, format!("{} splits on empty text", pattern)));
            }
        }
    }

    let bound = resolve_bindings(def, i, &clause.patterns)?;

    let mut unbound: Vec<_> = clause
        .body
        .free_vars()
        .into_iter()
        .filter(|x| !bound.contains(x))
        .collect();
    unbound.sort();
    if let Some(x) = unbound.first() {
        return Err(malformed(
            def,
            i,
            format!("body refers to unbound variable {}", x),
        ));
    }

    Ok(())
}

/// Every variable the clause binds, checking that split references can be
/// resolved in some order (the same order the matcher uses).
fn resolve_bindings(
    def: &OperationDef,
    i: usize,
    patterns: &[Pattern],
) -> Result<HashSet<Var>, EvalError> {
    let (mut pending, immediate): (Vec<&Pattern>, Vec<&Pattern>) =
        patterns.iter().partition(|p| p.depends_on().is_some());

    let mut bound: HashSet<Var> = immediate
        .iter()
        .flat_map(|p| p.binds())
        .cloned()
        .collect();

    while !pending.is_empty() {
        let (ready, waiting): (Vec<&Pattern>, Vec<&Pattern>) = pending
            .into_iter()
            .partition(|p| p.depends_on().map_or(true, |x| bound.contains(x)));

        if ready.is_empty() {
            let x = waiting[0].depends_on().map(|x| x.to_string()).unwrap_or_default();
            return Err(malformed(
                def,
                i,
                format!("{} splits on {}, which no other pattern binds", waiting[0], x),
            ));
        }

        bound.extend(ready.iter().flat_map(|p| p.binds()).cloned());
        pending = waiting;
    }

    Ok(bound)
}

fn malformed(def: &OperationDef, clause: usize, reason: String) -> EvalError {
    EvalError::MalformedPattern {
        op: def.name.clone(),
        clause,
        reason,
    }
}

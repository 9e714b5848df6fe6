// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/subst.rs
// Substitution of clause bindings into clause bodies

use crate::ast::*;
use crate::core::matcher::Bindings;

// ============================================================================
// Substitution
// ============================================================================

/// Replace every bound variable in `term` with its value: t{bindings}.
/// Unbound variables are left in place.
pub fn substitute(term: &Term, bindings: &Bindings) -> Term {
    match term {
        Term::Var(x) => match bindings.get(x) {
            Some(v) => Term::Lit(v.clone()),
            None => term.clone(),
        },

        Term::Lit(_) | Term::Fail(_) => term.clone(),

        Term::Seq(ts) => Term::Seq(subst_all(ts, bindings)),
        Term::Text(ts) => Term::Text(subst_all(ts, bindings)),
        Term::Call(op, ts) => Term::Call(op.clone(), subst_all(ts, bindings)),

        Term::Cons(h, t) => Term::cons(substitute(h, bindings), substitute(t, bindings)),
        Term::Snoc(i, l) => Term::snoc(substitute(i, bindings), substitute(l, bindings)),
        Term::Eq(a, b) => Term::eq(substitute(a, bindings), substitute(b, bindings)),

        Term::Tag(tag, t) => Term::Tag(tag.clone(), Box::new(substitute(t, bindings))),
        Term::Succ(t) => Term::succ(substitute(t, bindings)),
        Term::Unary(t) => Term::unary(substitute(t, bindings)),

        Term::If(c, a, b) => Term::if_then_else(
            substitute(c, bindings),
            substitute(a, bindings),
            substitute(b, bindings),
        ),
    }
}

fn subst_all(ts: &[Term], bindings: &Bindings) -> Vec<Term> {
    ts.iter().map(|t| substitute(t, bindings)).collect()
}

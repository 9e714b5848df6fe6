// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/flatten.rs
// Flattening nested sequences: FlattenOnce, FlattenDeep

use crate::ast::*;

// There is no "is a sequence" pattern. An element is a sequence exactly when
// it matches ⟨⟩ or ⟨h, ...t⟩, so a Bind clause placed after those two catches
// everything else.

pub fn definitions() -> Vec<OperationDef> {
    vec![spread(), flatten_once(), flatten_item(), flatten_deep()]
}

/// Spread: ⟨⟩ → ⟨⟩;  ⟨h, ...t⟩ → ⟨h, ...t⟩;  x → ⟨x⟩
fn spread() -> OperationDef {
    OperationDef::new("Spread", [Shape::Any])
        .clause([Pattern::empty_seq()], Term::empty_seq())
        .clause(
            [Pattern::head_tail("h", "t")],
            Term::cons(Term::var("h"), Term::var("t")),
        )
        .clause([Pattern::bind("x")], Term::seq(vec![Term::var("x")]))
}

/// FlattenOnce: ⟨⟩ → ⟨⟩;  ⟨h, ...t⟩ → Spread(h) ++ FlattenOnce(t)
fn flatten_once() -> OperationDef {
    OperationDef::new("FlattenOnce", [Shape::Seq])
        .clause([Pattern::empty_seq()], Term::empty_seq())
        .clause(
            [Pattern::head_tail("h", "t")],
            Term::call(
                "Concat",
                vec![
                    Term::call("Spread", vec![Term::var("h")]),
                    Term::call("FlattenOnce", vec![Term::var("t")]),
                ],
            ),
        )
}

/// FlattenItem: ⟨⟩ → ⟨⟩;  ⟨h, ...t⟩ → FlattenItem(h) ++ FlattenDeep(t);  x → ⟨x⟩
fn flatten_item() -> OperationDef {
    OperationDef::new("FlattenItem", [Shape::Any])
        .clause([Pattern::empty_seq()], Term::empty_seq())
        .clause(
            [Pattern::head_tail("h", "t")],
            Term::call(
                "Concat",
                vec![
                    Term::call("FlattenItem", vec![Term::var("h")]),
                    Term::call("FlattenDeep", vec![Term::var("t")]),
                ],
            ),
        )
        .clause([Pattern::bind("x")], Term::seq(vec![Term::var("x")]))
}

/// FlattenDeep: ⟨⟩ → ⟨⟩;  ⟨h, ...t⟩ → FlattenItem(h) ++ FlattenDeep(t)
fn flatten_deep() -> OperationDef {
    OperationDef::new("FlattenDeep", [Shape::Seq])
        .clause([Pattern::empty_seq()], Term::empty_seq())
        .clause(
            [Pattern::head_tail("h", "t")],
            Term::call(
                "Concat",
                vec![
                    Term::call("FlattenItem", vec![Term::var("h")]),
                    Term::call("FlattenDeep", vec![Term::var("t")]),
                ],
            ),
        )
}

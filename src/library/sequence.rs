// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/sequence.rs
// Sequence operations: Head, Last, Shift, Pop, Push, Unshift, Length, Reverse,
//                      Concat, Includes, IndexOf, Zip

use crate::ast::*;

pub fn definitions() -> Vec<OperationDef> {
    vec![
        head(),
        last(),
        shift(),
        pop(),
        push(),
        unshift(),
        length(),
        reverse(),
        concat(),
        includes(),
        index_of(),
        index_of_from(),
        zip(),
    ]
}

// ============================================================================
// Ends of a Sequence
// ============================================================================

/// Head: ⟨h, ..._⟩ → h;  ⟨⟩ → fail
fn head() -> OperationDef {
    OperationDef::new("Head", [Shape::Seq])
        .clause([Pattern::head_tail("h", "_")], Term::var("h"))
        .clause([Pattern::empty_seq()], Term::fail(FailKind::EmptySequence))
}

/// Last: ⟨..._, l⟩ → l;  ⟨⟩ → fail
fn last() -> OperationDef {
    OperationDef::new("Last", [Shape::Seq])
        .clause([Pattern::tail_last("_", "l")], Term::var("l"))
        .clause([Pattern::empty_seq()], Term::fail(FailKind::EmptySequence))
}

/// Shift: ⟨_, ...t⟩ → t;  ⟨⟩ → ⟨⟩
fn shift() -> OperationDef {
    OperationDef::new("Shift", [Shape::Seq])
        .clause([Pattern::head_tail("_", "t")], Term::var("t"))
        .clause([Pattern::empty_seq()], Term::empty_seq())
}

/// Pop: ⟨...i, _⟩ → i;  ⟨⟩ → ⟨⟩
fn pop() -> OperationDef {
    OperationDef::new("Pop", [Shape::Seq])
        .clause([Pattern::tail_last("i", "_")], Term::var("i"))
        .clause([Pattern::empty_seq()], Term::empty_seq())
}

fn push() -> OperationDef {
    OperationDef::new("Push", [Shape::Seq, Shape::Any]).clause(
        [Pattern::bind("s"), Pattern::bind("x")],
        Term::snoc(Term::var("s"), Term::var("x")),
    )
}

fn unshift() -> OperationDef {
    OperationDef::new("Unshift", [Shape::Seq, Shape::Any]).clause(
        [Pattern::bind("s"), Pattern::bind("x")],
        Term::cons(Term::var("x"), Term::var("s")),
    )
}

// ============================================================================
// Whole-Sequence Recursion
// ============================================================================

/// Length: ⟨⟩ → 0;  ⟨_, ...t⟩ → 1 + Length(t)
fn length() -> OperationDef {
    OperationDef::new("Length", [Shape::Seq])
        .clause([Pattern::empty_seq()], Term::num(0))
        .clause(
            [Pattern::head_tail("_", "t")],
            Term::succ(Term::call("Length", vec![Term::var("t")])),
        )
}

/// Reverse: ⟨⟩ → ⟨⟩;  ⟨h, ...t⟩ → ⟨...Reverse(t), h⟩
fn reverse() -> OperationDef {
    OperationDef::new("Reverse", [Shape::Seq])
        .clause([Pattern::empty_seq()], Term::empty_seq())
        .clause(
            [Pattern::head_tail("h", "t")],
            Term::snoc(Term::call("Reverse", vec![Term::var("t")]), Term::var("h")),
        )
}

/// Concat: ⟨⟩ ++ b → b;  ⟨h, ...t⟩ ++ b → ⟨h, ...(t ++ b)⟩
fn concat() -> OperationDef {
    OperationDef::new("Concat", [Shape::Seq, Shape::Seq])
        .clause([Pattern::empty_seq(), Pattern::bind("b")], Term::var("b"))
        .clause(
            [Pattern::head_tail("h", "t"), Pattern::bind("b")],
            Term::cons(
                Term::var("h"),
                Term::call("Concat", vec![Term::var("t"), Term::var("b")]),
            ),
        )
}

// ============================================================================
// Searching
// ============================================================================

/// Includes: ⟨⟩ → false;  ⟨h, ...t⟩ → h == x or Includes(t, x)
fn includes() -> OperationDef {
    OperationDef::new("Includes", [Shape::Seq, Shape::Any])
        .clause([Pattern::empty_seq(), Pattern::Wildcard], Term::bool(false))
        .clause(
            [Pattern::head_tail("h", "t"), Pattern::bind("x")],
            Term::if_then_else(
                Term::eq(Term::var("h"), Term::var("x")),
                Term::bool(true),
                Term::call("Includes", vec![Term::var("t"), Term::var("x")]),
            ),
        )
}

/// IndexOf(s, x) → IndexOfFrom(s, x, 0)
fn index_of() -> OperationDef {
    OperationDef::new("IndexOf", [Shape::Seq, Shape::Any]).clause(
        [Pattern::bind("s"), Pattern::bind("x")],
        Term::call(
            "IndexOfFrom",
            vec![Term::var("s"), Term::var("x"), Term::num(0)],
        ),
    )
}

/// IndexOfFrom: ⟨⟩ → not found;  ⟨h, ...t⟩ → i if h == x else IndexOfFrom(t, x, i + 1)
fn index_of_from() -> OperationDef {
    OperationDef::new("IndexOfFrom", [Shape::Seq, Shape::Any, Shape::Num])
        .clause(
            [Pattern::empty_seq(), Pattern::Wildcard, Pattern::Wildcard],
            Term::fail(FailKind::NotFound),
        )
        .clause(
            [
                Pattern::head_tail("h", "t"),
                Pattern::bind("x"),
                Pattern::bind("i"),
            ],
            Term::if_then_else(
                Term::eq(Term::var("h"), Term::var("x")),
                Term::var("i"),
                Term::call(
                    "IndexOfFrom",
                    vec![Term::var("t"), Term::var("x"), Term::succ(Term::var("i"))],
                ),
            ),
        )
}

/// Zip pairs elements up to the shorter sequence.
fn zip() -> OperationDef {
    OperationDef::new("Zip", [Shape::Seq, Shape::Seq])
        .clause(
            [Pattern::head_tail("a", "as"), Pattern::head_tail("b", "bs")],
            Term::cons(
                Term::seq(vec![Term::var("a"), Term::var("b")]),
                Term::call("Zip", vec![Term::var("as"), Term::var("bs")]),
            ),
        )
        .clause([Pattern::Wildcard, Pattern::Wildcard], Term::empty_seq())
}

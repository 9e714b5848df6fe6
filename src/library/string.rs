// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/string.rs
// String operations: TrimLeft, TrimRight, Trim, StartsWith, EndsWith,
//                    Replace, ReplaceAll, Join

use crate::ast::*;

const WHITESPACE: [&str; 3] = [" ", "\n", "\t"];

pub fn definitions() -> Vec<OperationDef> {
    vec![
        trim_left(),
        trim_right(),
        trim(),
        starts_with(),
        ends_with(),
        replace(),
        replace_all(),
        join(),
        join_rest(),
    ]
}

// ============================================================================
// Trimming
// ============================================================================

/// TrimLeft: " " + r → TrimLeft(r), likewise for "\n" and "\t";  s → s
fn trim_left() -> OperationDef {
    let def = WHITESPACE.iter().fold(
        OperationDef::new("TrimLeft", [Shape::Str]),
        |def, ws| {
            def.clause(
                [Pattern::prefix(ws, "r")],
                Term::call("TrimLeft", vec![Term::var("r")]),
            )
        },
    );
    def.clause([Pattern::bind("s")], Term::var("s"))
}

/// TrimRight: r + " " → TrimRight(r), likewise for "\n" and "\t";  s → s
fn trim_right() -> OperationDef {
    let def = WHITESPACE.iter().fold(
        OperationDef::new("TrimRight", [Shape::Str]),
        |def, ws| {
            def.clause(
                [Pattern::suffix("r", ws)],
                Term::call("TrimRight", vec![Term::var("r")]),
            )
        },
    );
    def.clause([Pattern::bind("s")], Term::var("s"))
}

fn trim() -> OperationDef {
    OperationDef::new("Trim", [Shape::Str]).clause(
        [Pattern::bind("s")],
        Term::call(
            "TrimRight",
            vec![Term::call("TrimLeft", vec![Term::var("s")])],
        ),
    )
}

// ============================================================================
// Prefix and Suffix Tests
// ============================================================================

/// StartsWith(p + _, p) → true;  otherwise false
fn starts_with() -> OperationDef {
    OperationDef::new("StartsWith", [Shape::Str, Shape::Str])
        .clause(
            [Pattern::prefix_ref("p", "_"), Pattern::bind("p")],
            Term::bool(true),
        )
        .clause([Pattern::Wildcard, Pattern::Wildcard], Term::bool(false))
}

/// EndsWith(_ + p, p) → true;  otherwise false
fn ends_with() -> OperationDef {
    OperationDef::new("EndsWith", [Shape::Str, Shape::Str])
        .clause(
            [Pattern::suffix_ref("_", "p"), Pattern::bind("p")],
            Term::bool(true),
        )
        .clause([Pattern::Wildcard, Pattern::Wildcard], Term::bool(false))
}

// ============================================================================
// Replacement
// ============================================================================

/// Replace(a + from + b, from, to) → a + to + b, leftmost occurrence only.
/// An empty `from` leaves the string alone.
fn replace() -> OperationDef {
    OperationDef::new("Replace", [Shape::Str, Shape::Str, Shape::Str])
        .clause(
            [Pattern::bind("s"), Pattern::lit(""), Pattern::Wildcard],
            Term::var("s"),
        )
        .clause(
            [
                Pattern::infix_ref("a", "from", "b"),
                Pattern::bind("from"),
                Pattern::bind("to"),
            ],
            Term::text(vec![Term::var("a"), Term::var("to"), Term::var("b")]),
        )
        .clause(
            [Pattern::bind("s"), Pattern::Wildcard, Pattern::Wildcard],
            Term::var("s"),
        )
}

/// ReplaceAll(a + from + b, from, to) → a + to + ReplaceAll(b, from, to)
fn replace_all() -> OperationDef {
    OperationDef::new("ReplaceAll", [Shape::Str, Shape::Str, Shape::Str])
        .clause(
            [Pattern::bind("s"), Pattern::lit(""), Pattern::Wildcard],
            Term::var("s"),
        )
        .clause(
            [
                Pattern::infix_ref("a", "from", "b"),
                Pattern::bind("from"),
                Pattern::bind("to"),
            ],
            Term::text(vec![
                Term::var("a"),
                Term::var("to"),
                Term::call(
                    "ReplaceAll",
                    vec![Term::var("b"), Term::var("from"), Term::var("to")],
                ),
            ]),
        )
        .clause(
            [Pattern::bind("s"), Pattern::Wildcard, Pattern::Wildcard],
            Term::var("s"),
        )
}

// ============================================================================
// Joining
// ============================================================================

/// Join: ⟨⟩ → "";  ⟨h, ...t⟩ → h + JoinRest(t, sep)
fn join() -> OperationDef {
    OperationDef::new("Join", [Shape::Seq, Shape::Str])
        .clause([Pattern::empty_seq(), Pattern::Wildcard], Term::lit(""))
        .clause(
            [Pattern::head_tail("h", "t"), Pattern::bind("sep")],
            Term::text(vec![
                Term::var("h"),
                Term::call("JoinRest", vec![Term::var("t"), Term::var("sep")]),
            ]),
        )
}

/// JoinRest: ⟨⟩ → "";  ⟨h, ...t⟩ → sep + h + JoinRest(t, sep)
fn join_rest() -> OperationDef {
    OperationDef::new("JoinRest", [Shape::Seq, Shape::Str])
        .clause([Pattern::empty_seq(), Pattern::Wildcard], Term::lit(""))
        .clause(
            [Pattern::head_tail("h", "t"), Pattern::bind("sep")],
            Term::text(vec![
                Term::var("sep"),
                Term::var("h"),
                Term::call("JoinRest", vec![Term::var("t"), Term::var("sep")]),
            ]),
        )
}

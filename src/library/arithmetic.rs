// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/arithmetic.rs
// Arithmetic on unary numerals: UnaryOf, Add, Subtract, Multiply, Fibonacci,
//                               GreaterThan, Sum

use crate::ast::*;

// Numerals are never added as integers. Every operation here turns its
// operands into unary sequences and counts the result with Length.

pub fn definitions() -> Vec<OperationDef> {
    vec![
        unary_of(),
        add(),
        strip_units(),
        subtract(),
        multiply(),
        fibonacci(),
        outlasts(),
        greater_than(),
        sum(),
    ]
}

fn unary(x: &str) -> Term {
    Term::call("UnaryOf", vec![Term::var(x)])
}

fn length(t: Term) -> Term {
    Term::call("Length", vec![t])
}

/// UnaryOf: n → ⟨(), (), ...⟩ of length n
fn unary_of() -> OperationDef {
    OperationDef::new("UnaryOf", [Shape::Num])
        .clause([Pattern::bind("n")], Term::unary(Term::var("n")))
}

/// Add(a, b) → Length(Concat(UnaryOf(a), UnaryOf(b)))
fn add() -> OperationDef {
    OperationDef::new("Add", [Shape::Num, Shape::Num]).clause(
        [Pattern::bind("a"), Pattern::bind("b")],
        length(Term::call("Concat", vec![unary("a"), unary("b")])),
    )
}

/// StripUnits drops one leading unit of `xs` per unit of `ys`.
/// Running out of `xs` first means the difference is negative.
fn strip_units() -> OperationDef {
    OperationDef::new("StripUnits", [Shape::Seq, Shape::Seq])
        .clause([Pattern::bind("xs"), Pattern::empty_seq()], Term::var("xs"))
        .clause(
            [Pattern::head_tail("_", "xs"), Pattern::head_tail("_", "ys")],
            Term::call("StripUnits", vec![Term::var("xs"), Term::var("ys")]),
        )
        .clause(
            [Pattern::empty_seq(), Pattern::head_tail("_", "_")],
            Term::fail(FailKind::NegativeResult),
        )
}

/// Subtract(a, b) → Length(StripUnits(UnaryOf(a), UnaryOf(b))), failing when b > a
fn subtract() -> OperationDef {
    OperationDef::new("Subtract", [Shape::Num, Shape::Num]).clause(
        [Pattern::bind("a"), Pattern::bind("b")],
        Term::if_then_else(
            Term::call("GreaterThan", vec![Term::var("b"), Term::var("a")]),
            Term::fail(FailKind::NegativeResult),
            length(Term::call("StripUnits", vec![unary("a"), unary("b")])),
        ),
    )
}

/// Multiply: (_, 0) → 0;  (a, b) → Add(a, Multiply(a, b - 1))
fn multiply() -> OperationDef {
    OperationDef::new("Multiply", [Shape::Num, Shape::Num])
        .clause([Pattern::Wildcard, Pattern::num(0)], Term::num(0))
        .clause(
            [Pattern::bind("a"), Pattern::bind("b")],
            Term::call(
                "Add",
                vec![
                    Term::var("a"),
                    Term::call(
                        "Multiply",
                        vec![
                            Term::var("a"),
                            Term::call("Subtract", vec![Term::var("b"), Term::num(1)]),
                        ],
                    ),
                ],
            ),
        )
}

/// Fibonacci, 0-indexed: 0 → 0;  1 → 1;  n → Fib(n - 1) + Fib(n - 2)
///
/// Each call recomputes both branches, so cost grows exponentially in n.
fn fibonacci() -> OperationDef {
    let fib_minus = |k: usize| {
        Term::call(
            "Fibonacci",
            vec![Term::call("Subtract", vec![Term::var("n"), Term::num(k)])],
        )
    };
    OperationDef::new("Fibonacci", [Shape::Num])
        .clause([Pattern::num(0)], Term::num(0))
        .clause([Pattern::num(1)], Term::num(1))
        .clause(
            [Pattern::bind("n")],
            Term::call("Add", vec![fib_minus(1), fib_minus(2)]),
        )
}

/// Outlasts: whether `xs` still has units once `ys` runs out
fn outlasts() -> OperationDef {
    OperationDef::new("Outlasts", [Shape::Seq, Shape::Seq])
        .clause(
            [Pattern::head_tail("_", "_"), Pattern::empty_seq()],
            Term::bool(true),
        )
        .clause([Pattern::empty_seq(), Pattern::Wildcard], Term::bool(false))
        .clause(
            [Pattern::head_tail("_", "xs"), Pattern::head_tail("_", "ys")],
            Term::call("Outlasts", vec![Term::var("xs"), Term::var("ys")]),
        )
}

fn greater_than() -> OperationDef {
    OperationDef::new("GreaterThan", [Shape::Num, Shape::Num]).clause(
        [Pattern::bind("a"), Pattern::bind("b")],
        Term::call("Outlasts", vec![unary("a"), unary("b")]),
    )
}

/// Sum: ⟨⟩ → 0;  ⟨h, ...t⟩ → Add(h, Sum(t))
fn sum() -> OperationDef {
    OperationDef::new("Sum", [Shape::Seq])
        .clause([Pattern::empty_seq()], Term::num(0))
        .clause(
            [Pattern::head_tail("h", "t")],
            Term::call(
                "Add",
                vec![Term::var("h"), Term::call("Sum", vec![Term::var("t")])],
            ),
        )
}

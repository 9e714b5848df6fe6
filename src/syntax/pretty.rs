// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Display for values, patterns, clause bodies and operation definitions

use crate::ast::*;
use std::fmt;

// ============================================================================
// Values
// ============================================================================

/// Prints in the literal syntax the parser reads back. Tags that are not
/// identifiers are quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Seq(vs) => {
                write!(f, "[")?;
                write_list(f, vs)?;
                write!(f, "]")
            }
            Value::Str(s) => write_quoted(f, s),
            Value::Num(n) => write!(f, "{}", n),
            Value::Tagged(tag, payload) => match (tag.as_str(), &**payload) {
                (TRUE_TAG, Value::Unit) | (FALSE_TAG, Value::Unit) => write!(f, "{}", tag),
                (_, Value::Unit) => write_tag(f, tag),
                (_, payload) => {
                    write_tag(f, tag)?;
                    write!(f, "({})", payload)
                }
            },
            Value::Unit => write!(f, "()"),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_tag(f: &mut fmt::Formatter, tag: &str) -> fmt::Result {
    write!(f, "#")?;
    if is_identifier(tag) {
        write!(f, "{}", tag)
    } else {
        write_quoted(f, tag)
    }
}

/// Same rule as the parser's `identifier`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

fn write_quoted(f: &mut fmt::Formatter, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

// ============================================================================
// Patterns
// ============================================================================

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Text::Lit(s) => write_quoted(f, s),
            Text::Ref(x) => write!(f, "{}", x),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pattern::Literal(v) => write!(f, "{}", v),
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Bind(x) => write!(f, "{}", x),
            Pattern::HeadTail(h, t) => write!(f, "[{}, ...{}]", h, t),
            Pattern::TailLast(i, l) => write!(f, "[...{}, {}]", i, l),
            Pattern::PrefixSplit(p, r) => write!(f, "{} + {}", p, r),
            Pattern::SuffixSplit(r, s) => write!(f, "{} + {}", r, s),
            Pattern::InfixSplit(a, m, b) => write!(f, "{} + {} + {}", a, m, b),
            Pattern::TagMatch(tag, p) => {
                write_tag(f, tag)?;
                write!(f, "({})", p)
            }
        }
    }
}

// ============================================================================
// Clause Bodies
// ============================================================================

impl fmt::Display for FailKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailKind::EmptySequence => write!(f, "empty-sequence"),
            FailKind::NegativeResult => write!(f, "negative-result"),
            FailKind::NotFound => write!(f, "not-found"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Lit(v) => write!(f, "{}", v),
            Term::Var(x) => write!(f, "{}", x),
            Term::Seq(ts) => {
                write!(f, "[")?;
                write_list(f, ts)?;
                write!(f, "]")
            }
            Term::Cons(h, t) => write!(f, "[{}, ...{}]", h, t),
            Term::Snoc(i, l) => write!(f, "[...{}, {}]", i, l),
            Term::Text(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", parts.join(" + "))
            }
            Term::Tag(tag, t) => {
                write_tag(f, tag)?;
                write!(f, "({})", t)
            }
            Term::Succ(t) => write!(f, "1 + {}", t),
            Term::Unary(t) => write!(f, "unary({})", t),
            Term::Eq(a, b) => write!(f, "{} == {}", a, b),
            Term::If(c, a, b) => write!(f, "if {} then {} else {}", c, a, b),
            Term::Call(op, args) => {
                write!(f, "{}(", op)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Term::Fail(kind) => write!(f, "fail {}", kind),
        }
    }
}

// ============================================================================
// Operation Definitions
// ============================================================================

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        write_list(f, &self.patterns)?;
        write!(f, ") → {}", self.body)
    }
}

impl fmt::Display for OperationDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.params)?;
        write!(f, ")")?;
        for clause in &self.clauses {
            writeln!(f)?;
            write!(f, "  {}", clause)?;
        }
        Ok(())
    }
}

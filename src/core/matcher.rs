// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/matcher.rs
// Destructuring values against patterns

use crate::ast::*;
use std::collections::HashMap;

// ============================================================================
// Bindings
// ============================================================================

/// Pattern variable → matched value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings(HashMap<Var, Value>);

impl Bindings {
    pub fn new() -> Self {
        Bindings(HashMap::new())
    }

    pub fn get(&self, x: &Var) -> Option<&Value> {
        self.0.get(x)
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.0.get(&Var::new(name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bind `x` to `v`. A variable seen twice must see equal values.
    fn bind(mut self, x: &Var, v: Value) -> Option<Self> {
        if x.is_discard() {
            return Some(self);
        }
        match self.0.get(x) {
            Some(existing) if *existing != v => None,
            Some(_) => Some(self),
            None => {
                self.0.insert(x.clone(), v);
                Some(self)
            }
        }
    }

    fn text(&self, text: &Text) -> Option<String> {
        match text {
            Text::Lit(s) => Some(s.clone()),
            Text::Ref(x) => self.get(x).and_then(Value::as_str).map(str::to_string),
        }
    }
}

// ============================================================================
// Single Patterns
// ============================================================================

/// Match `value` against `pattern`, extending `bindings`.
/// Returns None when the pattern does not apply.
pub fn match_pattern(pattern: &Pattern, value: &Value, bindings: Bindings) -> Option<Bindings> {
    match pattern {
        Pattern::Literal(v) => (v == value).then_some(bindings),

        Pattern::Wildcard => Some(bindings),

        Pattern::Bind(x) => bindings.bind(x, value.clone()),

        Pattern::HeadTail(h, t) => {
            let (first, rest) = value.as_seq()?.split_first()?;
            bindings
                .bind(h, first.clone())?
                .bind(t, Value::Seq(rest.to_vec()))
        }

        Pattern::TailLast(i, l) => {
            let (last, init) = value.as_seq()?.split_last()?;
            bindings
                .bind(i, Value::Seq(init.to_vec()))?
                .bind(l, last.clone())
        }

        Pattern::PrefixSplit(p, r) => {
            let s = value.as_str()?;
            let p = bindings.text(p)?;
            let rest = s.strip_prefix(p.as_str())?;
            bindings.bind(r, Value::str(rest))
        }

        Pattern::SuffixSplit(r, suffix) => {
            let s = value.as_str()?;
            let suffix = bindings.text(suffix)?;
            let rest = s.strip_suffix(suffix.as_str())?;
            bindings.bind(r, Value::str(rest))
        }

        Pattern::InfixSplit(a, m, b) => {
            let s = value.as_str()?;
            let m = bindings.text(m)?;
            if m.is_empty() {
                return None;
            }
            // leftmost occurrence
            let (before, after) = s.split_once(m.as_str())?;
            bindings
                .bind(a, Value::str(before))?
                .bind(b, Value::str(after))
        }

        Pattern::TagMatch(tag, p) => match value {
            Value::Tagged(t, payload) if t == tag => bindings.bind(p, (**payload).clone()),
            _ => None,
        },
    }
}

// ============================================================================
// Clauses
// ============================================================================

/// Match a full argument list against a clause's patterns.
///
/// String splits whose text refers to another variable are tried after the
/// patterns that bind it, so `StartsWith⟨s, p⟩` can split `s` by `p`.
pub fn match_clause(patterns: &[Pattern], args: &[Value]) -> Option<Bindings> {
    if patterns.len() != args.len() {
        return None;
    }

    let (deferred, immediate): (Vec<_>, Vec<_>) = patterns
        .iter()
        .zip(args)
        .partition(|(p, _)| p.depends_on().is_some());

    let mut bindings = Bindings::new();
    for (p, v) in immediate {
        bindings = match_pattern(p, v, bindings)?;
    }

    // A reference may point at a variable bound by another deferred split.
    let mut pending = deferred;
    while !pending.is_empty() {
        let before = pending.len();
        let mut waiting = Vec::new();
        for (p, v) in pending {
            match p.depends_on() {
                Some(x) if bindings.get(x).is_none() => waiting.push((p, v)),
                _ => bindings = match_pattern(p, v, bindings)?,
            }
        }
        if waiting.len() == before {
            return None;
        }
        pending = waiting;
    }

    Some(bindings)
}

// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/distribute.rs
// Applying an operation over every branch of a tagged sum

use crate::ast::*;
use crate::core::error::EvalError;
use crate::rewrite::Engine;
use log::trace;
use std::collections::BTreeMap;

/// What to do with the payload of one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handling {
    /// Evaluate the named operation on the payload
    Apply(OpName),
    /// Leave the payload as it is. Still an explicit choice: unlisted tags fail.
    Keep,
}

/// A total mapping from the tags a sum may carry to their handling.
///
/// Built around a default operation:
///
/// ```
/// use typelevel_rewrite::*;
///
/// let engine = Engine::with_library().unwrap();
/// let lengths = Distribution::over("Length").case("list").keep("scalar");
///
/// let branch = Value::tagged("list", Value::nums([7, 8, 9]));
/// let result = engine.distribute(&lengths, &branch).unwrap();
/// assert_eq!(result, Value::tagged("list", Value::num(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    op: OpName,
    handlers: BTreeMap<String, Handling>,
}

impl Distribution {
    pub fn over(op: &str) -> Self {
        Distribution {
            op: op.to_string(),
            handlers: BTreeMap::new(),
        }
    }

    /// Handle `tag` with the default operation
    pub fn case(mut self, tag: &str) -> Self {
        self.handlers
            .insert(tag.to_string(), Handling::Apply(self.op.clone()));
        self
    }

    pub fn cases<'a>(self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter().fold(self, |d, tag| d.case(tag))
    }

    /// Handle `tag` with a different operation
    pub fn case_with(mut self, tag: &str, op: &str) -> Self {
        self.handlers
            .insert(tag.to_string(), Handling::Apply(op.to_string()));
        self
    }

    pub fn keep(mut self, tag: &str) -> Self {
        self.handlers.insert(tag.to_string(), Handling::Keep);
        self
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn handling(&self, tag: &str) -> Option<&Handling> {
        self.handlers.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl Engine {
    /// `Tagged(tag, payload)` → `Tagged(tag, handling(payload))`.
    /// A tag without handling fails `UnhandledTag`.
    pub fn distribute(&self, dist: &Distribution, value: &Value) -> Result<Value, EvalError> {
        let (tag, payload) = value.as_tagged().ok_or_else(|| EvalError::NoMatchingClause {
            op: dist.op.clone(),
            args: vec![value.clone()],
        })?;

        let handling = dist
            .handling(tag)
            .ok_or_else(|| EvalError::UnhandledTag {
                tag: tag.to_string(),
            })?;

        trace!("distributing {} over #{}", dist.op, tag);
        let result = match handling {
            Handling::Apply(op) => self.evaluate(op, std::slice::from_ref(payload))?,
            Handling::Keep => payload.clone(),
        };
        Ok(Value::tagged(tag, result))
    }

    /// Distribute over a union given as the sequence of its branches.
    /// Every branch is handled independently; order is preserved.
    pub fn distribute_all(&self, dist: &Distribution, union: &Value) -> Result<Value, EvalError> {
        let branches = union
            .as_seq()
            .ok_or_else(|| EvalError::shape(Shape::Seq, union))?;

        branches
            .iter()
            .map(|branch| self.distribute(dist, branch))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Seq)
    }
}

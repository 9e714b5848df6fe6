// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/evaluator.rs
// Clause selection and body reduction

use crate::ast::*;
use crate::core::error::EvalError;
use crate::core::matcher::match_clause;
use crate::core::subst::substitute;
use crate::rewrite::Engine;
use log::{debug, trace};

/// The call being reduced, for error reporting
struct Frame<'a> {
    op: &'a str,
    clause: usize,
    args: &'a [Value],
}

impl Engine {
    /// Evaluate `op` on `args`.
    ///
    /// Clauses are tried in declaration order and the first match wins. Its
    /// bindings are substituted into the body, which is then reduced; calls in
    /// the body come back through here. Nothing is memoized, and termination
    /// rests entirely on the definitions recursing on smaller arguments.
    ///
    /// Reduction recurses on the native stack, a few frames per unit of a
    /// numeral or element of a sequence. Magnitudes in the low thousands can
    /// overflow a default 2 MB thread stack, so hosts working at that scale
    /// should evaluate on a thread with a larger stack.
    pub fn evaluate(&self, op: &str, args: &[Value]) -> Result<Value, EvalError> {
        let def = self
            .lookup(op)
            .ok_or_else(|| EvalError::UnknownOperation(op.to_string()))?;

        for (i, clause) in def.clauses.iter().enumerate() {
            if let Some(bindings) = match_clause(&clause.patterns, args) {
                trace!("{} clause {} matched {} bindings", op, i, bindings.len());
                let body = substitute(&clause.body, &bindings);
                let frame = Frame { op, clause: i, args };
                return self.reduce(&body, &frame);
            }
        }

        debug!("no clause of {} matched {} args", op, args.len());
        Err(EvalError::NoMatchingClause {
            op: op.to_string(),
            args: args.to_vec(),
        })
    }

    fn reduce(&self, term: &Term, frame: &Frame) -> Result<Value, EvalError> {
        match term {
            Term::Lit(v) => Ok(v.clone()),

            // validate() rules this out for registered operations
            Term::Var(x) => Err(EvalError::MalformedPattern {
                op: frame.op.to_string(),
                clause: frame.clause,
                reason: format!("body refers to unbound variable {}", x),
            }),

            Term::Seq(ts) => Ok(Value::Seq(self.reduce_all(ts, frame)?)),

            Term::Cons(h, t) => {
                let h = self.reduce(h, frame)?;
                let mut vs = into_seq(self.reduce(t, frame)?)?;
                vs.insert(0, h);
                Ok(Value::Seq(vs))
            }

            Term::Snoc(i, l) => {
                let mut vs = into_seq(self.reduce(i, frame)?)?;
                vs.push(self.reduce(l, frame)?);
                Ok(Value::Seq(vs))
            }

            Term::Text(parts) => {
                let mut out = String::new();
                for part in self.reduce_all(parts, frame)? {
                    match part {
                        Value::Str(s) => out.push_str(&s),
                        other => return Err(EvalError::shape(Shape::Str, &other)),
                    }
                }
                Ok(Value::Str(out))
            }

            Term::Tag(tag, t) => Ok(Value::tagged(tag.clone(), self.reduce(t, frame)?)),

            Term::Succ(t) => match self.reduce(t, frame)? {
                Value::Num(n) => Ok(Value::Num(n + 1)),
                other => Err(EvalError::shape(Shape::Num, &other)),
            },

            Term::Unary(t) => match self.reduce(t, frame)? {
                Value::Num(n) => Ok(Value::unary(n)),
                other => Err(EvalError::shape(Shape::Num, &other)),
            },

            Term::Eq(a, b) => {
                let a = self.reduce(a, frame)?;
                let b = self.reduce(b, frame)?;
                Ok(Value::bool(a == b))
            }

            // Only the chosen branch is reduced.
            Term::If(c, then, otherwise) => {
                let cond = self.reduce(c, frame)?;
                match cond.as_bool() {
                    Some(true) => self.reduce(then, frame),
                    Some(false) => self.reduce(otherwise, frame),
                    None => Err(EvalError::shape(Shape::Tagged, &cond)),
                }
            }

            Term::Call(op, ts) => {
                let args = self.reduce_all(ts, frame)?;
                self.evaluate(op, &args)
            }

            Term::Fail(kind) => Err(EvalError::declared(*kind, frame.op, frame.args)),
        }
    }

    fn reduce_all(&self, ts: &[Term], frame: &Frame) -> Result<Vec<Value>, EvalError> {
        ts.iter().map(|t| self.reduce(t, frame)).collect()
    }
}

fn into_seq(v: Value) -> Result<Vec<Value>, EvalError> {
    match v {
        Value::Seq(vs) => Ok(vs),
        other => Err(EvalError::shape(Shape::Seq, &other)),
    }
}

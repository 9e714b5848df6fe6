// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast.rs
// Values, patterns, clause bodies and operation definitions

use std::collections::HashSet;
use std::fmt;

// ============================================================================
// Core Types
// ============================================================================

/// Pattern variable names. The name `_` never binds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(pub String);

impl Var {
    pub fn new(s: impl Into<String>) -> Self {
        Var(s.into())
    }

    pub fn is_discard(&self) -> bool {
        self.0 == "_"
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operation names
pub type OpName = String;

pub const TRUE_TAG: &str = "true";
pub const FALSE_TAG: &str = "false";

// ============================================================================
// Values
// ============================================================================

/// The closed set of value shapes the engine rewrites.
///
/// Equality is structural all the way down. A `Num` is exposed as an integer,
/// but arithmetic in the library only ever sees it through its unary form
/// (see [`Value::unary`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Seq(Vec<Value>),
    Str(String),
    Num(usize),
    Tagged(String, Box<Value>),
    Unit,
}

/// Declared shape of an operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Any,
    Seq,
    Str,
    Num,
    Tagged,
    Unit,
}

impl Shape {
    pub fn of(value: &Value) -> Shape {
        match value {
            Value::Seq(_) => Shape::Seq,
            Value::Str(_) => Shape::Str,
            Value::Num(_) => Shape::Num,
            Value::Tagged(_, _) => Shape::Tagged,
            Value::Unit => Shape::Unit,
        }
    }

    /// Whether a value of shape `other` can reach a parameter declared `self`
    pub fn admits(self, other: Shape) -> bool {
        self == Shape::Any || other == Shape::Any || self == other
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Shape::Any => "any",
            Shape::Seq => "seq",
            Shape::Str => "str",
            Shape::Num => "num",
            Shape::Tagged => "tagged",
            Shape::Unit => "unit",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Patterns
// ============================================================================

/// Split text in a string pattern: fixed, or taken from another binding of the
/// same clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Lit(String),
    Ref(Var),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Literal(Value),
    Wildcard,
    Bind(Var),
    HeadTail(Var, Var),
    TailLast(Var, Var),
    PrefixSplit(Text, Var),
    SuffixSplit(Var, Text),
    InfixSplit(Var, Text, Var),
    TagMatch(String, Var),
}

// ============================================================================
// Clause Bodies
// ============================================================================

/// Failures a clause body may declare explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailKind {
    EmptySequence,
    NegativeResult,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Lit(Value),
    Var(Var),
    Seq(Vec<Term>),
    Cons(Box<Term>, Box<Term>),
    Snoc(Box<Term>, Box<Term>),
    Text(Vec<Term>),
    Tag(String, Box<Term>),
    Succ(Box<Term>),
    Unary(Box<Term>),
    Eq(Box<Term>, Box<Term>),
    If(Box<Term>, Box<Term>, Box<Term>),
    Call(OpName, Vec<Term>),
    Fail(FailKind),
}

// ============================================================================
// Operation Definitions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub patterns: Vec<Pattern>,
    pub body: Term,
}

/// A named operation: parameter shapes plus clauses tried top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDef {
    pub name: OpName,
    pub params: Vec<Shape>,
    pub clauses: Vec<Clause>,
}

impl OperationDef {
    pub fn new(name: impl Into<String>, params: impl Into<Vec<Shape>>) -> Self {
        OperationDef {
            name: name.into(),
            params: params.into(),
            clauses: Vec::new(),
        }
    }

    pub fn clause(mut self, patterns: impl Into<Vec<Pattern>>, body: Term) -> Self {
        self.clauses.push(Clause {
            patterns: patterns.into(),
            body,
        });
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Value {
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(vs) => Some(vs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<usize> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<(&str, &Value)> {
        match self {
            Value::Tagged(tag, payload) => Some((tag, payload)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.as_tagged() {
            Some((TRUE_TAG, Value::Unit)) => Some(true),
            Some((FALSE_TAG, Value::Unit)) => Some(false),
            _ => None,
        }
    }

    /// Unary form of a numeral: `n` unit placeholders
    pub fn unary(n: usize) -> Self {
        Value::Seq(vec![Value::Unit; n])
    }
}

impl Text {
    pub fn reference(&self) -> Option<&Var> {
        match self {
            Text::Ref(x) => Some(x),
            Text::Lit(_) => None,
        }
    }
}

impl Pattern {
    /// Variables this pattern binds when it matches
    pub fn binds(&self) -> Vec<&Var> {
        let vars = match self {
            Pattern::Literal(_) | Pattern::Wildcard => vec![],
            Pattern::Bind(x) => vec![x],
            Pattern::HeadTail(h, t) => vec![h, t],
            Pattern::TailLast(i, l) => vec![i, l],
            Pattern::PrefixSplit(_, r) | Pattern::SuffixSplit(r, _) => vec![r],
            Pattern::InfixSplit(a, _, b) => vec![a, b],
            Pattern::TagMatch(_, p) => vec![p],
        };
        vars.into_iter().filter(|x| !x.is_discard()).collect()
    }

    /// Variable whose binding this pattern needs before it can be tried
    pub fn depends_on(&self) -> Option<&Var> {
        match self {
            Pattern::PrefixSplit(text, _)
            | Pattern::SuffixSplit(_, text)
            | Pattern::InfixSplit(_, text, _) => text.reference(),
            _ => None,
        }
    }

    /// The shape of value this pattern can possibly match
    pub fn shape(&self) -> Shape {
        match self {
            Pattern::Literal(v) => Shape::of(v),
            Pattern::Wildcard | Pattern::Bind(_) => Shape::Any,
            Pattern::HeadTail(_, _) | Pattern::TailLast(_, _) => Shape::Seq,
            Pattern::PrefixSplit(_, _) | Pattern::SuffixSplit(_, _) | Pattern::InfixSplit(_, _, _) => {
                Shape::Str
            }
            Pattern::TagMatch(_, _) => Shape::Tagged,
        }
    }
}

impl Term {
    pub fn free_vars(&self) -> HashSet<Var> {
        let mut fvs = HashSet::new();
        self.collect_vars(&mut fvs);
        fvs
    }

    fn collect_vars(&self, fvs: &mut HashSet<Var>) {
        match self {
            Term::Lit(_) | Term::Fail(_) => {}
            Term::Var(x) => {
                fvs.insert(x.clone());
            }
            Term::Seq(ts) | Term::Text(ts) | Term::Call(_, ts) => {
                for t in ts {
                    t.collect_vars(fvs);
                }
            }
            Term::Cons(a, b) | Term::Snoc(a, b) | Term::Eq(a, b) => {
                a.collect_vars(fvs);
                b.collect_vars(fvs);
            }
            Term::Tag(_, t) | Term::Succ(t) | Term::Unary(t) => t.collect_vars(fvs),
            Term::If(c, a, b) => {
                c.collect_vars(fvs);
                a.collect_vars(fvs);
                b.collect_vars(fvs);
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.free_vars().is_empty()
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Value {
    pub fn seq(vs: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(vs.into_iter().collect())
    }

    pub fn empty_seq() -> Self {
        Value::Seq(vec![])
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn num(n: usize) -> Self {
        Value::Num(n)
    }

    pub fn tagged(tag: impl Into<String>, payload: Value) -> Self {
        Value::Tagged(tag.into(), Box::new(payload))
    }

    pub fn bool(b: bool) -> Self {
        let tag = if b { TRUE_TAG } else { FALSE_TAG };
        Value::tagged(tag, Value::Unit)
    }

    pub fn unit() -> Self {
        Value::Unit
    }

    /// A sequence of numerals, the common case in tests and demos
    pub fn nums(ns: impl IntoIterator<Item = usize>) -> Self {
        Value::seq(ns.into_iter().map(Value::Num))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Num(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(vs: Vec<Value>) -> Self {
        Value::Seq(vs)
    }
}

impl Pattern {
    pub fn lit(v: impl Into<Value>) -> Self {
        Pattern::Literal(v.into())
    }

    pub fn empty_seq() -> Self {
        Pattern::Literal(Value::empty_seq())
    }

    pub fn num(n: usize) -> Self {
        Pattern::Literal(Value::Num(n))
    }

    pub fn bind(x: &str) -> Self {
        Pattern::Bind(Var::new(x))
    }

    pub fn head_tail(h: &str, t: &str) -> Self {
        Pattern::HeadTail(Var::new(h), Var::new(t))
    }

    pub fn tail_last(i: &str, l: &str) -> Self {
        Pattern::TailLast(Var::new(i), Var::new(l))
    }

    pub fn prefix(p: &str, rest: &str) -> Self {
        Pattern::PrefixSplit(Text::Lit(p.to_string()), Var::new(rest))
    }

    pub fn prefix_ref(p: &str, rest: &str) -> Self {
        Pattern::PrefixSplit(Text::Ref(Var::new(p)), Var::new(rest))
    }

    pub fn suffix(rest: &str, s: &str) -> Self {
        Pattern::SuffixSplit(Var::new(rest), Text::Lit(s.to_string()))
    }

    pub fn suffix_ref(rest: &str, s: &str) -> Self {
        Pattern::SuffixSplit(Var::new(rest), Text::Ref(Var::new(s)))
    }

    pub fn infix_ref(before: &str, m: &str, after: &str) -> Self {
        Pattern::InfixSplit(Var::new(before), Text::Ref(Var::new(m)), Var::new(after))
    }

    pub fn tag(tag: &str, payload: &str) -> Self {
        Pattern::TagMatch(tag.to_string(), Var::new(payload))
    }
}

impl Term {
    pub fn var(name: &str) -> Self {
        Term::Var(Var::new(name))
    }

    pub fn lit(v: impl Into<Value>) -> Self {
        Term::Lit(v.into())
    }

    pub fn num(n: usize) -> Self {
        Term::Lit(Value::Num(n))
    }

    pub fn bool(b: bool) -> Self {
        Term::Lit(Value::bool(b))
    }

    pub fn empty_seq() -> Self {
        Term::Lit(Value::empty_seq())
    }

    pub fn seq(ts: Vec<Term>) -> Self {
        Term::Seq(ts)
    }

    pub fn cons(h: Term, t: Term) -> Self {
        Term::Cons(Box::new(h), Box::new(t))
    }

    pub fn snoc(init: Term, last: Term) -> Self {
        Term::Snoc(Box::new(init), Box::new(last))
    }

    pub fn text(parts: Vec<Term>) -> Self {
        Term::Text(parts)
    }

    pub fn tag(tag: &str, payload: Term) -> Self {
        Term::Tag(tag.to_string(), Box::new(payload))
    }

    pub fn succ(n: Term) -> Self {
        Term::Succ(Box::new(n))
    }

    pub fn unary(n: Term) -> Self {
        Term::Unary(Box::new(n))
    }

    pub fn eq(a: Term, b: Term) -> Self {
        Term::Eq(Box::new(a), Box::new(b))
    }

    pub fn if_then_else(cond: Term, then: Term, otherwise: Term) -> Self {
        Term::If(Box::new(cond), Box::new(then), Box::new(otherwise))
    }

    pub fn call(op: &str, args: Vec<Term>) -> Self {
        Term::Call(op.to_string(), args)
    }

    pub fn fail(kind: FailKind) -> Self {
        Term::Fail(kind)
    }
}

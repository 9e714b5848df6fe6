// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/validate_test.rs
// Tests for registration-time rejection of malformed definitions

use typelevel_rewrite::*;

fn register(def: OperationDef) -> Result<(), EvalError> {
    Engine::new().register(def)
}

fn assert_malformed(result: Result<(), EvalError>, clause: usize) {
    match result {
        Err(EvalError::MalformedPattern { clause: c, .. }) => assert_eq!(c, clause),
        other => panic!("expected MalformedPattern in clause {}, got {:?}", clause, other),
    }
}

#[test]
fn test_every_library_definition_is_well_formed() {
    for def in library::definitions() {
        assert_eq!(validate(&def), Ok(()), "{} failed validation", def.name);
    }
}

#[test]
fn test_operation_without_clauses() {
    assert_malformed(register(OperationDef::new("Empty", [Shape::Any])), 0);
}

#[test]
fn test_arity_disagreement() {
    let def = OperationDef::new("Pair", [Shape::Any, Shape::Any])
        .clause([Pattern::Wildcard, Pattern::Wildcard], Term::num(0))
        .clause([Pattern::Wildcard], Term::num(1));
    assert_malformed(register(def), 1);
}

#[test]
fn test_sequence_pattern_on_string_parameter() {
    let def = OperationDef::new("Bad", [Shape::Str])
        .clause([Pattern::head_tail("h", "t")], Term::var("h"));
    assert_malformed(register(def), 0);
}

#[test]
fn test_string_pattern_on_sequence_parameter() {
    let def = OperationDef::new("Bad", [Shape::Seq])
        .clause([Pattern::prefix("a", "r")], Term::var("r"));
    assert_malformed(register(def), 0);
}

#[test]
fn test_literal_of_wrong_shape() {
    let def = OperationDef::new("Bad", [Shape::Num])
        .clause([Pattern::lit("zero")], Term::num(0));
    assert_malformed(register(def), 0);
}

#[test]
fn test_tag_pattern_on_unit_parameter() {
    let def = OperationDef::new("Bad", [Shape::Unit])
        .clause([Pattern::tag("ok", "p")], Term::var("p"));
    assert_malformed(register(def), 0);
}

#[test]
fn test_any_parameter_admits_every_pattern() {
    let def = OperationDef::new("Probe", [Shape::Any])
        .clause([Pattern::head_tail("h", "_")], Term::var("h"))
        .clause([Pattern::prefix("a", "r")], Term::var("r"))
        .clause([Pattern::tag("ok", "p")], Term::var("p"))
        .clause([Pattern::Wildcard], Term::lit(Value::Unit));
    assert_eq!(register(def), Ok(()));
}

#[test]
fn test_body_with_unbound_variable() {
    let def = OperationDef::new("Bad", [Shape::Seq])
        .clause([Pattern::empty_seq()], Term::empty_seq())
        .clause([Pattern::head_tail("h", "_")], Term::var("t"));
    assert_malformed(register(def), 1);
}

#[test]
fn test_discarded_variable_cannot_be_used() {
    let def = OperationDef::new("Bad", [Shape::Seq])
        .clause([Pattern::head_tail("_", "t")], Term::var("_"));
    assert_malformed(register(def), 0);
}

#[test]
fn test_split_on_variable_nobody_binds() {
    let def = OperationDef::new("Bad", [Shape::Str, Shape::Str])
        .clause([Pattern::prefix_ref("p", "r"), Pattern::Wildcard], Term::var("r"));
    assert_malformed(register(def), 0);
}

#[test]
fn test_split_on_its_own_rest_variable() {
    let def = OperationDef::new("Bad", [Shape::Str])
        .clause([Pattern::prefix_ref("r", "r")], Term::var("r"));
    assert_malformed(register(def), 0);
}

#[test]
fn test_split_chain_resolves() {
    // (a + r, p + a, p): a is bound by the second split once p is known
    let def = OperationDef::new("Chain", [Shape::Str, Shape::Str, Shape::Str]).clause(
        [
            Pattern::prefix_ref("a", "r"),
            Pattern::prefix_ref("p", "a"),
            Pattern::bind("p"),
        ],
        Term::var("r"),
    );
    assert_eq!(register(def), Ok(()));
}

#[test]
fn test_infix_on_empty_literal() {
    let def = OperationDef::new("Bad", [Shape::Str]).clause(
        [Pattern::InfixSplit(
            Var::new("a"),
            Text::Lit(String::new()),
            Var::new("b"),
        )],
        Term::var("a"),
    );
    assert_malformed(register(def), 0);
}

#[test]
fn test_malformed_definition_is_not_registered() {
    let mut engine = Engine::new();
    let def = OperationDef::new("Bad", [Shape::Seq])
        .clause([Pattern::head_tail("h", "_")], Term::var("nope"));
    assert!(engine.register(def).is_err());
    assert!(!engine.contains("Bad"));
}

// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/string_test.rs
// Tests for the string operations

use typelevel_rewrite::*;

fn eval(op: &str, args: &[&str]) -> Result<Value, EvalError> {
    let args: Vec<Value> = args.iter().map(|s| Value::str(*s)).collect();
    Engine::standard().unwrap().evaluate(op, &args)
}

#[test]
fn test_trim_left() {
    assert_eq!(eval("TrimLeft", &[" hi"]), Ok(Value::str("hi")));
    assert_eq!(eval("TrimLeft", &["  \n\t Hello World  "]), Ok(Value::str("Hello World  ")));
    assert_eq!(eval("TrimLeft", &["hi"]), Ok(Value::str("hi")));
    assert_eq!(eval("TrimLeft", &[""]), Ok(Value::str("")));
}

#[test]
fn test_trim_right() {
    assert_eq!(eval("TrimRight", &["  hi \n"]), Ok(Value::str("  hi")));
}

#[test]
fn test_trim() {
    assert_eq!(eval("Trim", &["  \n\t Hello World  \t"]), Ok(Value::str("Hello World")));
    assert_eq!(eval("Trim", &["   "]), Ok(Value::str("")));
}

#[test]
fn test_starts_with() {
    assert_eq!(eval("StartsWith", &["Hello", "He"]), Ok(Value::bool(true)));
    assert_eq!(eval("StartsWith", &["Hello", "lo"]), Ok(Value::bool(false)));
    assert_eq!(eval("StartsWith", &["Hello", ""]), Ok(Value::bool(true)));
    assert_eq!(eval("StartsWith", &["He", "Hello"]), Ok(Value::bool(false)));
}

#[test]
fn test_ends_with() {
    assert_eq!(eval("EndsWith", &["Hello", "llo"]), Ok(Value::bool(true)));
    assert_eq!(eval("EndsWith", &["Hello", "He"]), Ok(Value::bool(false)));
}

#[test]
fn test_replace() {
    assert_eq!(eval("Replace", &["Hello World", "World", "TS"]), Ok(Value::str("Hello TS")));
}

#[test]
fn test_replace_first_occurrence_only() {
    assert_eq!(eval("Replace", &["foo foo", "foo", "bar"]), Ok(Value::str("bar foo")));
}

#[test]
fn test_replace_without_match_is_unchanged() {
    assert_eq!(eval("Replace", &["abc", "z", "y"]), Ok(Value::str("abc")));
}

#[test]
fn test_replace_empty_from_is_unchanged() {
    assert_eq!(eval("Replace", &["abc", "", "y"]), Ok(Value::str("abc")));
    assert_eq!(eval("ReplaceAll", &["abc", "", "y"]), Ok(Value::str("abc")));
}

#[test]
fn test_replace_all() {
    assert_eq!(eval("ReplaceAll", &["foo foo", "foo", "bar"]), Ok(Value::str("bar bar")));
    assert_eq!(eval("ReplaceAll", &["t y p e s", " ", ""]), Ok(Value::str("types")));
}

#[test]
fn test_replace_all_does_not_rescan_replacement() {
    // the inserted "aa" is never matched again
    assert_eq!(eval("ReplaceAll", &["aXa", "a", "aa"]), Ok(Value::str("aaXaa")));
}

#[test]
fn test_join() {
    let engine = Engine::standard().unwrap();
    let parts = Value::seq(vec![Value::str("a"), Value::str("b"), Value::str("c")]);
    assert_eq!(engine.evaluate("Join", &[parts, Value::str("-")]), Ok(Value::str("a-b-c")));
    assert_eq!(
        engine.evaluate("Join", &[Value::empty_seq(), Value::str("-")]),
        Ok(Value::str(""))
    );
}

#[test]
fn test_join_of_non_strings_is_a_shape_mismatch() {
    let engine = Engine::standard().unwrap();
    let result = engine.evaluate("Join", &[Value::nums([1, 2]), Value::str(",")]);
    assert!(matches!(result, Err(EvalError::ShapeMismatch { expected: Shape::Str, .. })));
}

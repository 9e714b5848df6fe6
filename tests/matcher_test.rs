// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/matcher_test.rs
// Tests for single patterns and clause matching

use typelevel_rewrite::*;

fn matches(pattern: &Pattern, value: &Value) -> Option<Bindings> {
    match_pattern(pattern, value, Bindings::new())
}

#[test]
fn test_literal_matches_equal_value() {
    // [1, [2]] against [1, [2]]
    let v = Value::seq(vec![Value::num(1), Value::nums([2])]);
    let result = matches(&Pattern::Literal(v.clone()), &v);
    assert_eq!(result.map(|b| b.len()), Some(0));
}

#[test]
fn test_literal_rejects_different_value() {
    assert!(matches(&Pattern::lit("a"), &Value::str("b")).is_none());
    assert!(matches(&Pattern::num(0), &Value::empty_seq()).is_none());
}

#[test]
fn test_wildcard_binds_nothing() {
    let result = matches(&Pattern::Wildcard, &Value::str("anything"));
    assert_eq!(result, Some(Bindings::new()));
}

#[test]
fn test_head_tail() {
    // [h, ...t] against [1, 2, 3] → h = 1, t = [2, 3]
    let b = matches(&Pattern::head_tail("h", "t"), &Value::nums([1, 2, 3])).unwrap();
    assert_eq!(b.lookup("h"), Some(&Value::num(1)));
    assert_eq!(b.lookup("t"), Some(&Value::nums([2, 3])));
}

#[test]
fn test_head_tail_single_element_has_empty_tail() {
    let b = matches(&Pattern::head_tail("h", "t"), &Value::nums([7])).unwrap();
    assert_eq!(b.lookup("t"), Some(&Value::empty_seq()));
}

#[test]
fn test_head_tail_rejects_empty_and_non_sequences() {
    assert!(matches(&Pattern::head_tail("h", "t"), &Value::empty_seq()).is_none());
    assert!(matches(&Pattern::head_tail("h", "t"), &Value::str("abc")).is_none());
}

#[test]
fn test_tail_last() {
    // [...i, l] against [1, 2, 3] → i = [1, 2], l = 3
    let b = matches(&Pattern::tail_last("i", "l"), &Value::nums([1, 2, 3])).unwrap();
    assert_eq!(b.lookup("i"), Some(&Value::nums([1, 2])));
    assert_eq!(b.lookup("l"), Some(&Value::num(3)));
}

#[test]
fn test_discard_variable_does_not_bind() {
    let b = matches(&Pattern::head_tail("_", "t"), &Value::nums([1, 2])).unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!(b.lookup("_"), None);
}

#[test]
fn test_prefix_split() {
    // "He" + r against "Hello" → r = "llo"
    let b = matches(&Pattern::prefix("He", "r"), &Value::str("Hello")).unwrap();
    assert_eq!(b.lookup("r"), Some(&Value::str("llo")));
    assert!(matches(&Pattern::prefix("lo", "r"), &Value::str("Hello")).is_none());
}

#[test]
fn test_prefix_split_empty_prefix_matches() {
    let b = matches(&Pattern::prefix("", "r"), &Value::str("abc")).unwrap();
    assert_eq!(b.lookup("r"), Some(&Value::str("abc")));
}

#[test]
fn test_suffix_split() {
    // r + "lo" against "Hello" → r = "Hel"
    let b = matches(&Pattern::suffix("r", "lo"), &Value::str("Hello")).unwrap();
    assert_eq!(b.lookup("r"), Some(&Value::str("Hel")));
    assert!(matches(&Pattern::suffix("r", "He"), &Value::str("Hello")).is_none());
}

#[test]
fn test_string_split_rejects_non_strings() {
    assert!(matches(&Pattern::prefix("a", "r"), &Value::nums([1])).is_none());
    assert!(matches(&Pattern::suffix("r", "a"), &Value::Unit).is_none());
}

#[test]
fn test_tag_match() {
    // #ok(p) against #ok(5) → p = 5
    let b = matches(&Pattern::tag("ok", "p"), &Value::tagged("ok", Value::num(5))).unwrap();
    assert_eq!(b.lookup("p"), Some(&Value::num(5)));
    assert!(matches(&Pattern::tag("ok", "p"), &Value::tagged("err", Value::num(5))).is_none());
}

#[test]
fn test_clause_arity_must_agree() {
    let patterns = [Pattern::bind("a"), Pattern::bind("b")];
    assert!(match_clause(&patterns, &[Value::num(1)]).is_none());
}

#[test]
fn test_clause_resolves_split_reference_bound_later() {
    // (p + r, p) against ("Hello", "He") → r = "llo"
    let patterns = [Pattern::prefix_ref("p", "r"), Pattern::bind("p")];
    let b = match_clause(&patterns, &[Value::str("Hello"), Value::str("He")]).unwrap();
    assert_eq!(b.lookup("r"), Some(&Value::str("llo")));
    assert_eq!(b.lookup("p"), Some(&Value::str("He")));
}

#[test]
fn test_clause_infix_split_takes_leftmost_occurrence() {
    // (a + m + b, m) against ("x-y-z", "-") → a = "x", b = "y-z"
    let patterns = [Pattern::infix_ref("a", "m", "b"), Pattern::bind("m")];
    let b = match_clause(&patterns, &[Value::str("x-y-z"), Value::str("-")]).unwrap();
    assert_eq!(b.lookup("a"), Some(&Value::str("x")));
    assert_eq!(b.lookup("b"), Some(&Value::str("y-z")));
}

#[test]
fn test_clause_infix_split_never_matches_empty_text() {
    let patterns = [Pattern::infix_ref("a", "m", "b"), Pattern::bind("m")];
    assert!(match_clause(&patterns, &[Value::str("abc"), Value::str("")]).is_none());
}

#[test]
fn test_clause_split_reference_to_non_string_fails() {
    let patterns = [Pattern::prefix_ref("p", "r"), Pattern::bind("p")];
    assert!(match_clause(&patterns, &[Value::str("Hello"), Value::num(1)]).is_none());
}

#[test]
fn test_clause_repeated_variable_requires_equal_values() {
    // (x, x) matches (3, 3) but not (3, 4)
    let patterns = [Pattern::bind("x"), Pattern::bind("x")];
    assert!(match_clause(&patterns, &[Value::num(3), Value::num(3)]).is_some());
    assert!(match_clause(&patterns, &[Value::num(3), Value::num(4)]).is_none());
}

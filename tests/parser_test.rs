// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/parser_test.rs
// Integration tests for parser and pretty-printer

use typelevel_rewrite::*;

#[test]
fn test_parse_and_print_roundtrip() {
    let examples = vec![
        "42",
        "\"hello\"",
        "\"\"",
        "()",
        "true",
        "false",
        "[]",
        "[1, 2, 3]",
        "[[1], [], [2, [3]]]",
        "#none",
        "#some(7)",
        "#pair([1, \"a\"])",
        "\"tab\\tand \\\"quote\\\"\"",
        "#\"my tag\"",
        "#\"1st\"([2])",
    ];

    for input in examples {
        println!("\n=== Testing: {} ===", input);
        match parse_value_str(input) {
            Ok(value) => {
                let output = format!("{}", value);
                println!("  Input:  '{}'", input);
                println!("  Output: '{}'", output);
                assert_eq!(output, input);
            }
            Err(e) => panic!("Failed to parse '{}': {}", input, e),
        }
    }
}

#[test]
fn test_parse_values() {
    assert_eq!(parse_value_str("5"), Ok(Value::num(5)));
    assert_eq!(parse_value_str("  [ 1 ,2 ] "), Ok(Value::nums([1, 2])));
    assert_eq!(parse_value_str("⟨1, 2⟩"), Ok(Value::nums([1, 2])));
    assert_eq!(parse_value_str("\"a\\nb\""), Ok(Value::str("a\nb")));
    assert_eq!(parse_value_str("true"), Ok(Value::bool(true)));
    assert_eq!(
        parse_value_str("#leaf(\"x\")"),
        Ok(Value::tagged("leaf", Value::str("x")))
    );
    assert_eq!(parse_value_str("#leaf"), Ok(Value::tagged("leaf", Value::Unit)));
}

#[test]
fn test_tags_that_are_not_identifiers_are_quoted() {
    let value = Value::tagged("my tag", Value::Unit);
    assert_eq!(value.to_string(), "#\"my tag\"");
    assert_eq!(parse_value_str(&value.to_string()), Ok(value));

    let value = Value::tagged("", Value::num(1));
    assert_eq!(value.to_string(), "#\"\"(1)");
    assert_eq!(parse_value_str(&value.to_string()), Ok(value));

    assert_eq!(Value::tagged("ok-2", Value::Unit).to_string(), "#ok-2");
}

#[test]
fn test_parse_command() {
    let command = parse_command_str("Concat [1] [2, 3]").unwrap();
    assert_eq!(command.op, "Concat");
    assert_eq!(command.args, vec![Value::nums([1]), Value::nums([2, 3])]);

    let command = parse_command_str("Replace \"Hello World\" \"World\" \"TS\"").unwrap();
    assert_eq!(command.op, "Replace");
    assert_eq!(command.args.len(), 3);

    let command = parse_command_str("Fibonacci 10").unwrap();
    assert_eq!(command.args, vec![Value::num(10)]);
}

#[test]
fn test_parse_command_without_arguments() {
    let command = parse_command_str("Length").unwrap();
    assert_eq!(command.op, "Length");
    assert!(command.args.is_empty());
}

#[test]
fn test_parse_errors() {
    assert!(parse_value_str("[1, 2").is_err());
    assert!(parse_value_str("\"open").is_err());
    assert!(parse_value_str("1 2").is_err());
    assert!(parse_command_str("Head [1] ]").is_err());
    assert!(parse_command_str("").is_err());
}

#[test]
fn test_display_patterns_and_definitions() {
    assert_eq!(Pattern::head_tail("h", "t").to_string(), "[h, ...t]");
    assert_eq!(Pattern::tail_last("init", "l").to_string(), "[...init, l]");
    assert_eq!(Pattern::prefix(" ", "rest").to_string(), "\" \" + rest");
    assert_eq!(Pattern::Wildcard.to_string(), "_");

    let def = OperationDef::new("Head", [Shape::Seq])
        .clause([Pattern::head_tail("h", "_")], Term::var("h"))
        .clause([Pattern::empty_seq()], Term::fail(FailKind::EmptySequence));
    assert_eq!(
        def.to_string(),
        "Head(seq)\n  ([h, ..._]) → h\n  ([]) → fail empty-sequence"
    );
}

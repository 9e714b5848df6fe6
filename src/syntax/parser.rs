// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Parser for value literals and REPL commands using nom

use crate::ast::*;
use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag},
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace0},
    combinator::{map, map_res, opt, recognize, value as constant},
    error::{context, VerboseError},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded},
    IResult,
};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// An operation name applied to literal arguments: `Concat [1] [2, 3]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub op: OpName,
    pub args: Vec<Value>,
}

// ============================================================================
// Lexer
// ============================================================================

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<O>
where
    F: FnMut(&'a str) -> ParseResult<O>,
{
    delimited(multispace0, inner, multispace0)
}

fn identifier(input: &str) -> ParseResult<String> {
    context(
        "identifier",
        map(
            recognize(pair(
                alt((alpha1, tag("_"))),
                many0(alt((alphanumeric1, tag("_"), tag("-")))),
            )),
            |s: &str| s.to_string(),
        ),
    )(input)
}

// ============================================================================
// Literals
// ============================================================================

fn number(input: &str) -> ParseResult<Value> {
    context(
        "number",
        map(map_res(digit1, |s: &str| s.parse::<usize>()), Value::Num),
    )(input)
}

fn quoted(input: &str) -> ParseResult<String> {
    let escape = alt((
        constant("\\", char('\\')),
        constant("\"", char('"')),
        constant("\n", char('n')),
        constant("\t", char('t')),
    ));
    map(
        delimited(
            char('"'),
            opt(escaped_transform(is_not("\\\""), '\\', escape)),
            char('"'),
        ),
        Option::unwrap_or_default,
    )(input)
}

fn string(input: &str) -> ParseResult<Value> {
    context("string", map(quoted, Value::Str))(input)
}

fn unit(input: &str) -> ParseResult<Value> {
    context("unit", constant(Value::Unit, pair(char('('), ws(char(')')))))(input)
}

fn boolean(input: &str) -> ParseResult<Value> {
    context(
        "boolean",
        alt((
            constant(Value::bool(true), tag("true")),
            constant(Value::bool(false), tag("false")),
        )),
    )(input)
}

// ============================================================================
// Compound Values
// ============================================================================

fn sequence(input: &str) -> ParseResult<Value> {
    context(
        "sequence",
        map(
            delimited(
                ws(alt((char('['), char('⟨')))),
                separated_list0(ws(char(',')), value),
                ws(alt((char(']'), char('⟩')))),
            ),
            Value::Seq,
        ),
    )(input)
}

/// `#tag` carries unit, `#tag(v)` carries `v`. A tag that is not an
/// identifier is written quoted: `#"my tag"`.
fn tagged(input: &str) -> ParseResult<Value> {
    context(
        "tagged",
        map(
            preceded(
                char('#'),
                pair(
                    alt((identifier, quoted)),
                    opt(delimited(ws(char('(')), value, ws(char(')')))),
                ),
            ),
            |(tag, payload)| Value::tagged(tag, payload.unwrap_or(Value::Unit)),
        ),
    )(input)
}

pub(crate) fn value(input: &str) -> ParseResult<Value> {
    context(
        "value",
        ws(alt((unit, number, string, sequence, tagged, boolean))),
    )(input)
}

fn command(input: &str) -> ParseResult<Command> {
    context(
        "command",
        map(pair(ws(identifier), many0(value)), |(op, args)| Command {
            op,
            args,
        }),
    )(input)
}

// ============================================================================
// Public API
// ============================================================================

pub fn parse_value_str(input: &str) -> Result<Value, String> {
    finish(value(input))
}

pub fn parse_command_str(input: &str) -> Result<Command, String> {
    finish(command(input))
}

fn finish<T: std::fmt::Debug>(result: ParseResult<T>) -> Result<T, String> {
    match result {
        Ok(("", parsed)) => Ok(parsed),
        Ok((remaining, parsed)) => Err(format!(
            "Parse succeeded '{:?}' but input remained: '{}'",
            parsed, remaining
        )),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(format!("Parse error: {:?}", e)),
        Err(nom::Err::Incomplete(_)) => Err("Incomplete input".to_string()),
    }
}

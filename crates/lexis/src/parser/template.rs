//! Template scanners using winnow.
//!
//! Translation strings carry two independent placeholder syntaxes:
//! - field templates, filled from a parameter tree: `%{key}` and `%<key>.f`
//! - positional templates, filled from ordered strings: `{N}` and `{}`
//!
//! Each syntax has its own parser, and the parsers for one family are combined
//! with `alt` into a single left-to-right scan. Anything that is not a
//! placeholder becomes a literal segment, so scanning never rejects input.

use super::ast::*;
use super::error::ParseError;
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take, take_while};

/// Scan a template for `%{key}` and `%<key>.f` placeholders.
///
/// A placeholder directly preceded by `%` is not a placeholder: `%%{x}` is
/// kept as written.
///
/// # Example
///
/// ```
/// use lexis::parser::{Segment, parse_field_template};
///
/// let template = parse_field_template("Hi %{name}, %%{raw}").unwrap();
/// assert_eq!(template.segments[1], Segment::Field { key: "name" });
/// assert!(!template.segments[2..].iter().any(|s| matches!(s, Segment::Field { .. })));
/// ```
pub fn parse_field_template(input: &str) -> Result<Template<'_>, ParseError> {
    scan(input, field_segment)
}

/// Scan a template for `{N}` and `{}` slots.
pub fn parse_positional_template(input: &str) -> Result<Template<'_>, ParseError> {
    scan(input, positional_segment)
}

fn scan<'i>(
    input: &'i str,
    segment: fn(&mut &'i str) -> ModalResult<Segment<'i>>,
) -> Result<Template<'i>, ParseError> {
    let mut remaining = input;
    let segments: Vec<Segment<'i>> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .map_err(|e| ParseError::Incomplete {
            offset: input.len() - remaining.len(),
            message: e.to_string(),
        })?;
    if !remaining.is_empty() {
        return Err(ParseError::Incomplete {
            offset: input.len() - remaining.len(),
            message: "unexpected trailing input".to_string(),
        });
    }
    Ok(Template { segments })
}

// =========================================================================
// Field templates
// =========================================================================

fn field_segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((
        escaped_percent,
        named_field,
        formatted_field,
        field_literal,
        single_char,
    ))
    .parse_next(input)
}

/// A run of two or more `%` guards whatever follows it.
fn escaped_percent<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    take_while(2.., '%').map(Segment::Literal).parse_next(input)
}

/// `%{key}`
fn named_field<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    delimited("%{", field_key, '}')
        .map(|key| Segment::Field { key })
        .parse_next(input)
}

/// `%<key>.f`
fn formatted_field<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    (preceded("%<", field_key), preceded(">.", one_of(is_word)))
        .map(|(key, spec)| Segment::Formatted { key, spec })
        .parse_next(input)
}

fn field_key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| is_word(c) || c == '.').parse_next(input)
}

fn field_literal<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    take_while(1.., |c: char| c != '%')
        .map(Segment::Literal)
        .parse_next(input)
}

// =========================================================================
// Positional templates
// =========================================================================

fn positional_segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((next_slot, indexed_slot, slot_literal, single_char)).parse_next(input)
}

/// `{}`
fn next_slot<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    "{}".value(Segment::Next).parse_next(input)
}

/// `{N}`
fn indexed_slot<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    delimited('{', digit1, '}')
        .with_taken()
        .map(|(digits, raw): (&str, &str)| Segment::Indexed {
            index: digits.parse().ok(),
            raw,
        })
        .parse_next(input)
}

fn slot_literal<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    take_while(1.., |c: char| c != '{')
        .map(Segment::Literal)
        .parse_next(input)
}

// =========================================================================
// Shared
// =========================================================================

/// A lone delimiter that did not start a placeholder.
fn single_char<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    take(1usize).map(Segment::Literal).parse_next(input)
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

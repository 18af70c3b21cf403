//! Integration tests for template scanning.

use lexis::parser::{Segment, Template, parse_field_template, parse_positional_template};

// =============================================================================
// Field templates
// =============================================================================

#[test]
fn test_field_pure_literal() {
    let t = parse_field_template("Hello, world!").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("Hello, world!")]);
    assert!(!t.has_placeholders());
}

#[test]
fn test_field_empty_string() {
    let t = parse_field_template("").unwrap();
    assert_eq!(t.segments, vec![]);
}

#[test]
fn test_named_field() {
    let t = parse_field_template("Hi %{name}!").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("Hi "),
            Segment::Field { key: "name" },
            Segment::Literal("!"),
        ]
    );
}

#[test]
fn test_adjacent_fields() {
    let t = parse_field_template("%{a}%{b}").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Field { key: "a" }, Segment::Field { key: "b" }]
    );
}

#[test]
fn test_dotted_field_key() {
    let t = parse_field_template("%{user.name}").unwrap();
    assert_eq!(t.segments, vec![Segment::Field { key: "user.name" }]);
}

#[test]
fn test_formatted_field() {
    let t = parse_field_template("%<n>.d items").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Formatted { key: "n", spec: 'd' },
            Segment::Literal(" items"),
        ]
    );
}

#[test]
fn test_formatted_field_needs_dot() {
    let t = parse_field_template("%<n>d").unwrap();
    assert!(!t.has_placeholders());
}

#[test]
fn test_double_percent_guards_field() {
    let t = parse_field_template("%%{x}").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("%%"), Segment::Literal("{x}")]);
}

#[test]
fn test_trailing_percent_is_literal() {
    let t = parse_field_template("100%").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("100"), Segment::Literal("%")]);
}

#[test]
fn test_unclosed_field_is_literal() {
    let t = parse_field_template("%{name").unwrap();
    assert!(!t.has_placeholders());
}

#[test]
fn test_field_syntax_ignores_slots() {
    let t = parse_field_template("{0} and {}").unwrap();
    assert!(!t.has_placeholders());
}

// =============================================================================
// Positional templates
// =============================================================================

#[test]
fn test_positional_pure_literal() {
    let t = parse_positional_template("no slots here").unwrap();
    assert_eq!(t, Template::literal("no slots here"));
}

#[test]
fn test_indexed_slot() {
    let t = parse_positional_template("a {0} b").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("a "),
            Segment::Indexed {
                index: Some(0),
                raw: "{0}"
            },
            Segment::Literal(" b"),
        ]
    );
}

#[test]
fn test_next_slot() {
    let t = parse_positional_template("{}{}").unwrap();
    assert_eq!(t.segments, vec![Segment::Next, Segment::Next]);
}

#[test]
fn test_non_numeric_braces_are_literal() {
    let t = parse_positional_template("{x}").unwrap();
    assert!(!t.has_placeholders());
}

#[test]
fn test_oversized_index_keeps_raw() {
    let t = parse_positional_template("{99999999999999999999999}").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Indexed {
            index: None,
            raw: "{99999999999999999999999}"
        }]
    );
}

#[test]
fn test_positional_syntax_ignores_fields() {
    let t = parse_positional_template("%{name}").unwrap();
    assert!(!t.has_placeholders());
}

//! Tests for placeholder substitution.

use std::f64::consts::PI;

use lexis::interpreter::{interpolate, interpolate_positional};
use lexis::{Value, params, positional};

// =========================================================================
// Named fields
// =========================================================================

#[test]
fn named_field_inserts_string_verbatim() {
    let p = params! { "name" => "Ana" };
    assert_eq!(interpolate("Hello, %{name}!", &p), "Hello, Ana!");
}

#[test]
fn repeated_and_adjacent_fields() {
    let p = params! { "a" => "x", "b" => "y" };
    assert_eq!(interpolate("%{a}%{b}%{a}", &p), "xyx");
}

#[test]
fn missing_field_is_left_unchanged() {
    let p = params! { "name" => "Ana" };
    assert_eq!(interpolate("%{name} and %{other}", &p), "Ana and %{other}");
}

#[test]
fn non_string_values_insert_as_json() {
    let p = params! {
        "n" => 3,
        "f" => 2.5,
        "yes" => true,
        "list" => vec![Value::from(1), Value::from("two")],
    };
    assert_eq!(
        interpolate("%{n} %{f} %{yes} %{list}", &p),
        r#"3 2.5 true [1,"two"]"#
    );
}

#[test]
fn inserted_values_are_not_rescanned() {
    let p = params! { "a" => "%{b}", "b" => "nope" };
    assert_eq!(interpolate("%{a}", &p), "%{b}");
}

#[test]
fn double_percent_guards_placeholder() {
    let p = params! { "x" => "value" };
    assert_eq!(interpolate("%%{x} %{x}", &p), "%%{x} value");
}

#[test]
fn dotted_key_reaches_nested_params() {
    let p = params! { "user" => params! { "name" => "Bo" } };
    assert_eq!(interpolate("Hi %{user.name}", &p), "Hi Bo");
}

#[test]
fn literal_dotted_key_wins_over_nested_path() {
    let p = params! {
        "user.name" => "Literal",
        "user" => params! { "name" => "Nested" },
    };
    assert_eq!(interpolate("%{user.name}", &p), "Literal");
}

#[test]
fn non_object_params_leave_text_unchanged() {
    assert_eq!(interpolate("%{a}", &Value::from("x")), "%{a}");
    assert_eq!(interpolate("%{a}", &Value::Null), "%{a}");
}

#[test]
fn text_without_placeholders_is_unchanged() {
    let p = params! { "a" => 1 };
    let text = "50% off {today}, 100%";
    assert_eq!(interpolate(text, &p), text);
}

// =========================================================================
// Formatted fields
// =========================================================================

#[test]
fn integer_format_truncates() {
    let p = params! { "pos" => 3.9, "neg" => -3.9, "int" => 7 };
    assert_eq!(interpolate("%<pos>.d %<neg>.i %<int>.d", &p), "3 -3 7");
}

#[test]
fn integer_format_defaults_to_zero() {
    let p = params! { "s" => "abc" };
    assert_eq!(interpolate("%<s>.d", &p), "0");
}

#[test]
fn float_format() {
    let p = params! { "f" => 2.5, "n" => 3, "s" => "x" };
    assert_eq!(interpolate("%<f>.f %<n>.f %<s>.f", &p), "2.5 3 0");
}

#[test]
fn float_format_uses_six_significant_digits() {
    let p = params! {
        "pi" => PI,
        "big" => 1234567.0,
        "sum" => 0.1 + 0.2,
        "tiny" => 0.00001234,
        "small" => 0.0001,
        "round" => 100000.0,
        "neg" => -2.0,
    };
    assert_eq!(
        interpolate("%<pi>.f|%<big>.f|%<sum>.f", &p),
        "3.14159|1.23457e+06|0.3"
    );
    assert_eq!(
        interpolate("%<tiny>.f|%<small>.f|%<round>.f|%<neg>.f", &p),
        "1.234e-05|0.0001|100000|-2"
    );
}

#[test]
fn string_format() {
    let p = params! { "s" => "text", "n" => 4 };
    assert_eq!(interpolate("%<s>.s %<n>.s", &p), "text 4");
}

#[test]
fn unknown_format_letter_uses_json() {
    let p = params! { "s" => "hi", "n" => 5 };
    assert_eq!(interpolate("%<s>.x %<n>.q", &p), r#""hi" 5"#);
}

#[test]
fn missing_formatted_field_is_left_unchanged() {
    let p = params! { "a" => 1 };
    assert_eq!(interpolate("%<b>.d", &p), "%<b>.d");
}

// =========================================================================
// Positional slots
// =========================================================================

#[test]
fn indexed_slots() {
    assert_eq!(interpolate_positional("{0} {1}", &["a", "b"]), "a b");
    assert_eq!(interpolate_positional("{1} {0} {1}", &["a", "b"]), "b a b");
}

#[test]
fn out_of_range_index_is_left_unchanged() {
    assert_eq!(interpolate_positional("{0} {5}", &["a"]), "a {5}");
}

#[test]
fn next_slots_consume_in_order() {
    assert_eq!(interpolate_positional("{}-{}", &["a", "b"]), "a-b");
}

#[test]
fn exhausted_next_slots_stay() {
    assert_eq!(interpolate_positional("{} {} {}", &["a"]), "a {} {}");
}

#[test]
fn next_cursor_is_independent_of_indices() {
    assert_eq!(interpolate_positional("{1} {} {}", &["a", "b"]), "b a b");
}

#[test]
fn positional_values_are_not_rescanned() {
    assert_eq!(interpolate_positional("{0}", &["{1}", "x"]), "{1}");
}

#[test]
fn no_params_leaves_text_unchanged() {
    let none: [&str; 0] = [];
    assert_eq!(interpolate_positional("{0} {}", &none), "{0} {}");
}

#[test]
fn positional_macro_stringifies_values() {
    let args = positional!["x", 42, 1.5, true];
    assert_eq!(interpolate_positional("{} {} {} {}", &args), "x 42 1.5 true");
}

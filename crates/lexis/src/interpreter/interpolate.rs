//! Placeholder substitution.
//!
//! Both entry points scan the template once, left to right, and write each
//! substitution straight to the output. Substituted text is never rescanned,
//! so a parameter value that itself looks like a placeholder stays literal.

use crate::parser::{Segment, Template, parse_field_template, parse_positional_template};
use crate::types::Value;

/// Fill `%{key}` and `%<key>.f` placeholders from a parameter object.
///
/// A key is looked up literally first, then as a dotted path into nested
/// parameters. Placeholders without a matching parameter are left as written.
/// When `params` is not an object the text is returned unchanged.
///
/// The format letter of `%<key>.f` selects the rendering:
/// - `d`, `i`: the value truncated to an integer, `0` when not numeric
/// - `f`: the value as a float in `%g` style (six significant digits), `0`
///   when not numeric
/// - `s`: strings verbatim, other values as JSON
/// - anything else: the value as JSON
///
/// # Example
///
/// ```
/// use lexis::{interpreter::interpolate, params};
///
/// let params = params! { "name" => "Ada", "n" => 2.9 };
/// assert_eq!(interpolate("%{name} has %<n>.d", &params), "Ada has 2");
/// assert_eq!(interpolate("%{missing} %%{name}", &params), "%{missing} %%{name}");
/// ```
pub fn interpolate(text: &str, params: &Value) -> String {
    if text.is_empty() || !params.is_object() {
        return text.to_string();
    }
    match parse_field_template(text) {
        Ok(template) => render_fields(&template, params),
        Err(_) => text.to_string(),
    }
}

/// Fill `{N}` and `{}` slots from an ordered list of strings.
///
/// `{N}` takes the N-th parameter and leaves the slot as written when out of
/// range. `{}` takes the next parameter in sequence; once the list is used up
/// the remaining `{}` stay literal.
///
/// ```
/// use lexis::interpreter::interpolate_positional;
///
/// assert_eq!(interpolate_positional("{1} before {0}", &["a", "b"]), "b before a");
/// assert_eq!(interpolate_positional("{} {} {}", &["x", "y"]), "x y {}");
/// assert_eq!(interpolate_positional("{7}", &["x"]), "{7}");
/// ```
pub fn interpolate_positional<S: AsRef<str>>(text: &str, params: &[S]) -> String {
    if text.is_empty() || params.is_empty() {
        return text.to_string();
    }
    let template = match parse_positional_template(text) {
        Ok(template) => template,
        Err(_) => return text.to_string(),
    };

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for segment in &template.segments {
        match segment {
            Segment::Indexed { index, raw } => {
                match index.and_then(|i| params.get(i)) {
                    Some(param) => output.push_str(param.as_ref()),
                    None => output.push_str(raw),
                }
            }
            Segment::Next => match params.get(cursor) {
                Some(param) => {
                    output.push_str(param.as_ref());
                    cursor += 1;
                }
                None => output.push_str("{}"),
            },
            other => push_verbatim(&mut output, other),
        }
    }
    output
}

fn render_fields(template: &Template<'_>, params: &Value) -> String {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Field { key } => match lookup_param(params, key) {
                Some(value) => output.push_str(&value.to_text()),
                None => push_verbatim(&mut output, segment),
            },
            Segment::Formatted { key, spec } => match lookup_param(params, key) {
                Some(value) => output.push_str(&format_value(value, *spec)),
                None => push_verbatim(&mut output, segment),
            },
            other => push_verbatim(&mut output, other),
        }
    }
    output
}

fn lookup_param<'a>(params: &'a Value, key: &str) -> Option<&'a Value> {
    params.get(key).or_else(|| params.get_path(key))
}

fn format_value(value: &Value, spec: char) -> String {
    match spec {
        'd' | 'i' => value.to_integer().unwrap_or(0).to_string(),
        'f' => format_general(value.as_f64().unwrap_or(0.0)),
        's' => value.to_text(),
        _ => value.to_json(),
    }
}

/// Significant digits used by `%<key>.f`.
const FLOAT_PRECISION: i32 = 6;

/// Render `value` in C's `%g` style with six significant digits: fixed
/// notation for exponents in `-4..6`, scientific otherwise, trailing zeros
/// dropped.
fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Rounding to the target precision first gives the exponent after carry,
    // so 999999.5 is treated as 1e6.
    let mantissa_digits = usize::try_from(FLOAT_PRECISION - 1).unwrap_or(0);
    let scientific = format!("{value:.mantissa_digits$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= FLOAT_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(FLOAT_PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Drop trailing zeros after a decimal point, and the point itself if bare.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Write a segment back exactly as it appeared in the template.
fn push_verbatim(output: &mut String, segment: &Segment<'_>) {
    match segment {
        Segment::Literal(text) => output.push_str(text),
        Segment::Field { key } => {
            output.push_str("%{");
            output.push_str(key);
            output.push('}');
        }
        Segment::Formatted { key, spec } => {
            output.push_str("%<");
            output.push_str(key);
            output.push_str(">.");
            output.push(*spec);
        }
        Segment::Indexed { raw, .. } => output.push_str(raw),
        Segment::Next => output.push_str("{}"),
    }
}

//! Locale-aware rendering of numbers, prices and dates.
//!
//! All three renderers share the same pattern language: `%` followed by a
//! single character is a token, everything else is copied through.

mod config;
mod date;
mod number;
mod overrides;

pub use config::{CurrencyConfig, DAYS_IN_WEEK, DateTimeConfig, FormatConfig, MONTHS_IN_YEAR, NumberConfig};
pub use date::{ISO_8601_PATTERN, format_date, resolve_pattern};
pub use number::{MAX_FRACT_DIGITS, format_number, format_price};
pub use overrides::{CurrencyOverrides, DateTimeOverrides, FormatOverrides, NumberOverrides};

const TOKEN_MARKER: char = '%';

/// Expand `%x` tokens in `pattern`.
///
/// `expand` writes the replacement for a token and returns `true`, or
/// returns `false` to keep the token as written. A trailing `%` is kept.
fn expand_tokens(pattern: &str, mut expand: impl FnMut(char, &mut String) -> bool) -> String {
    let mut output = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != TOKEN_MARKER {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some(token) => {
                if !expand(token, &mut output) {
                    output.push(TOKEN_MARKER);
                    output.push(token);
                }
            }
            None => output.push(TOKEN_MARKER),
        }
    }
    output
}

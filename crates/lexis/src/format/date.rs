//! Date and time rendering.
//!
//! | token | output |
//! |---|---|
//! | `%H` | hour, two digits |
//! | `%M`, `%i` | minute, two digits |
//! | `%S`, `%s` | second, two digits |
//! | `%d` | day of month, two digits |
//! | `%m` | month number (1-based), two digits |
//! | `%Y` | year, four digits |
//! | `%l` / `%a` | long / short weekday name |
//! | `%F` / `%b` | long / short month name |
//!
//! Any other `%x`, and a trailing `%`, is copied as written.

use crate::format::config::{DateTimeConfig, FormatConfig};
use crate::format::expand_tokens;
use crate::types::CalendarBreakdown;

/// Pattern used when none is given.
pub const ISO_8601_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Turn an alias like `"short_date"` into its pattern.
///
/// Anything that is not an alias is used as a literal pattern; a missing or
/// empty pattern means [`ISO_8601_PATTERN`].
pub fn resolve_pattern<'a>(pattern: Option<&'a str>, config: &'a DateTimeConfig) -> &'a str {
    match pattern {
        None | Some("") => ISO_8601_PATTERN,
        Some(pattern) => config.pattern(pattern).unwrap_or(pattern),
    }
}

/// Render `date` with a pattern or pattern alias.
///
/// ```
/// use lexis::{CalendarBreakdown, FormatConfig, format_date};
///
/// let date = CalendarBreakdown::builder()
///     .year(2024)
///     .month(0)
///     .day(5)
///     .hour(9)
///     .minute(3)
///     .weekday(5)
///     .build();
/// let config = FormatConfig::default();
/// assert_eq!(format_date(None, &date, &config), "2024-01-05T09:03:00");
/// assert_eq!(format_date(Some("long_date"), &date, &config), "January 05, 2024");
/// assert_eq!(format_date(Some("%a %q"), &date, &config), "Fri %q");
/// ```
pub fn format_date(pattern: Option<&str>, date: &CalendarBreakdown, config: &FormatConfig) -> String {
    let pattern = resolve_pattern(pattern, &config.date_time);
    expand_tokens(pattern, |token, output| {
        match token {
            'H' => push_two_digits(output, date.hour),
            'M' | 'i' => push_two_digits(output, date.minute),
            'S' | 's' => push_two_digits(output, date.second),
            'd' => push_two_digits(output, date.day),
            'm' => push_two_digits(output, date.month.saturating_add(1)),
            'Y' => output.push_str(&format!("{:04}", date.year)),
            'l' => push_name(output, &config.long_day_names, date.weekday),
            'a' => push_name(output, &config.short_day_names, date.weekday),
            'F' => push_name(output, &config.long_month_names, date.month),
            'b' => push_name(output, &config.short_month_names, date.month),
            _ => return false,
        }
        true
    })
}

fn push_two_digits(output: &mut String, value: u32) {
    output.push_str(&format!("{value:02}"));
}

/// Out-of-range indices write nothing.
fn push_name(output: &mut String, names: &[String], index: u32) {
    if let Some(name) = usize::try_from(index).ok().and_then(|i| names.get(i)) {
        output.push_str(name);
    }
}

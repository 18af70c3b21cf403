//! Number and price rendering.

use crate::format::config::{CurrencyConfig, NumberConfig};
use crate::format::expand_tokens;

/// Beyond this many fractional digits the scaled value no longer fits.
pub const MAX_FRACT_DIGITS: u8 = 18;

/// Render a number with grouping, fixed fractional digits and a sign.
///
/// The magnitude is rounded half away from zero. Non-finite values render
/// as Rust displays them.
///
/// ```
/// use lexis::{NumberConfig, format_number};
///
/// let config = NumberConfig::default();
/// assert_eq!(format_number(1234.5, &config), "1 234.50");
/// assert_eq!(format_number(-5.0, &config), "-5.00");
/// assert_eq!(format_number(0.125, &config), "0.13");
/// ```
pub fn format_number(value: f64, config: &NumberConfig) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = config.fract_digits.min(MAX_FRACT_DIGITS);
    let factor = 10_u128.pow(u32::from(digits));
    let scaled = (value.abs() * factor as f64).round() as u128;
    let integer = scaled.div_euclid(factor);
    let fraction = scaled.rem_euclid(factor);

    let mut output = String::new();
    if value < 0.0 {
        output.push_str(&config.negative_symbol);
    } else {
        output.push_str(&config.positive_symbol);
    }
    output.push_str(&group_thousands(&integer.to_string(), &config.thousand_separator));
    if digits > 0 {
        output.push_str(&config.decimal_symbol);
        output.push_str(&format!("{fraction:0width$}", width = usize::from(digits)));
    }
    output
}

/// Render a monetary amount with the currency's sign-specific pattern.
///
/// ```
/// use lexis::{CurrencyConfig, format_price};
///
/// let config = CurrencyConfig::default();
/// assert_eq!(format_price(10.0, &config), "XXX 10.00");
/// assert_eq!(format_price(-10.0, &config), "XXX -10.00");
/// ```
pub fn format_price(amount: f64, config: &CurrencyConfig) -> String {
    let number = format_number(amount, &config.number_config());
    let pattern = if amount < 0.0 {
        &config.negative_format
    } else {
        &config.positive_format
    };
    expand_tokens(pattern, |token, output| {
        match token {
            'q' => output.push_str(&number),
            'c' => output.push_str(&config.symbol),
            'p' => {}
            _ => return false,
        }
        true
    })
}

/// Insert `separator` between groups of three digits, from the right.
fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + separator.len() * len.div_euclid(3));
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i).rem_euclid(3) == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

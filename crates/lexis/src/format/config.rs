//! Format configuration and its defaults.

use serde::Serialize;
use tracing::warn;

use crate::format::overrides::{
    CurrencyOverrides, DateTimeOverrides, FormatOverrides, NumberOverrides,
};

pub const MONTHS_IN_YEAR: usize = 12;
pub const DAYS_IN_WEEK: usize = 7;

const SHORT_MONTH_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const LONG_MONTH_NAMES: [&str; MONTHS_IN_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const SHORT_DAY_NAMES: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const LONG_DAY_NAMES: [&str; DAYS_IN_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Rendering of plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberConfig {
    pub decimal_symbol: String,
    pub thousand_separator: String,
    pub fract_digits: u8,
    pub positive_symbol: String,
    pub negative_symbol: String,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            decimal_symbol: ".".to_string(),
            thousand_separator: " ".to_string(),
            fract_digits: 2,
            positive_symbol: String::new(),
            negative_symbol: "-".to_string(),
        }
    }
}

impl NumberConfig {
    fn apply(&mut self, overrides: &NumberOverrides) {
        set(&mut self.decimal_symbol, overrides.decimal_symbol.as_ref());
        set(&mut self.thousand_separator, overrides.thousand_separator.as_ref());
        set(&mut self.fract_digits, overrides.fract_digits.as_ref());
        set(&mut self.positive_symbol, overrides.positive_symbol.as_ref());
        set(&mut self.negative_symbol, overrides.negative_symbol.as_ref());
    }
}

/// Rendering of monetary amounts.
///
/// `positive_format` and `negative_format` are patterns where `%c` is the
/// symbol, `%q` the formatted magnitude and `%p` expands to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub name: String,
    pub short_name: String,
    pub decimal_symbol: String,
    pub thousand_separator: String,
    pub fract_digits: u8,
    pub positive_symbol: String,
    pub negative_symbol: String,
    pub positive_format: String,
    pub negative_format: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        let number = NumberConfig::default();
        Self {
            symbol: "XXX".to_string(),
            name: "Currency".to_string(),
            short_name: "XXX".to_string(),
            decimal_symbol: number.decimal_symbol,
            thousand_separator: number.thousand_separator,
            fract_digits: number.fract_digits,
            positive_symbol: number.positive_symbol,
            negative_symbol: number.negative_symbol,
            positive_format: "%c %p%q".to_string(),
            negative_format: "%c %p%q".to_string(),
        }
    }
}

impl CurrencyConfig {
    /// The number settings used for the magnitude of an amount.
    pub fn number_config(&self) -> NumberConfig {
        NumberConfig {
            decimal_symbol: self.decimal_symbol.clone(),
            thousand_separator: self.thousand_separator.clone(),
            fract_digits: self.fract_digits,
            positive_symbol: self.positive_symbol.clone(),
            negative_symbol: self.negative_symbol.clone(),
        }
    }

    fn apply(&mut self, overrides: &CurrencyOverrides) {
        set(&mut self.symbol, overrides.symbol.as_ref());
        set(&mut self.name, overrides.name.as_ref());
        set(&mut self.short_name, overrides.short_name.as_ref());
        set(&mut self.decimal_symbol, overrides.decimal_symbol.as_ref());
        set(&mut self.thousand_separator, overrides.thousand_separator.as_ref());
        set(&mut self.fract_digits, overrides.fract_digits.as_ref());
        set(&mut self.positive_symbol, overrides.positive_symbol.as_ref());
        set(&mut self.negative_symbol, overrides.negative_symbol.as_ref());
        set(&mut self.positive_format, overrides.positive_format.as_ref());
        set(&mut self.negative_format, overrides.negative_format.as_ref());
    }
}

/// Named date and time patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeConfig {
    pub long_time: String,
    pub short_time: String,
    pub long_date: String,
    pub short_date: String,
    pub long_date_time: String,
    pub short_date_time: String,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self {
            long_time: "%H:%M:%S".to_string(),
            short_time: "%H:%M".to_string(),
            long_date: "%F %d, %Y".to_string(),
            short_date: "%m/%d/%Y".to_string(),
            long_date_time: "%F %d, %Y %H:%M:%S".to_string(),
            short_date_time: "%m/%d/%Y %H:%M".to_string(),
        }
    }
}

impl DateTimeConfig {
    /// The pattern registered under an alias such as `"short_date"`.
    pub fn pattern(&self, alias: &str) -> Option<&str> {
        let pattern = match alias {
            "long_time" => &self.long_time,
            "short_time" => &self.short_time,
            "long_date" => &self.long_date,
            "short_date" => &self.short_date,
            "long_date_time" => &self.long_date_time,
            "short_date_time" => &self.short_date_time,
            _ => return None,
        };
        Some(pattern)
    }

    fn apply(&mut self, overrides: &DateTimeOverrides) {
        set(&mut self.long_time, overrides.long_time.as_ref());
        set(&mut self.short_time, overrides.short_time.as_ref());
        set(&mut self.long_date, overrides.long_date.as_ref());
        set(&mut self.short_date, overrides.short_date.as_ref());
        set(&mut self.long_date_time, overrides.long_date_time.as_ref());
        set(&mut self.short_date_time, overrides.short_date_time.as_ref());
    }
}

/// Everything the format engine needs to render numbers, prices and dates.
///
/// Name lists are fixed-size arrays, so a config always has exactly 12
/// month names and 7 day names.
///
/// # Example
///
/// ```
/// use lexis::{FormatConfig, FormatOverrides, NumberOverrides};
///
/// let mut config = FormatConfig::default();
/// config.apply(
///     &FormatOverrides::builder()
///         .number(NumberOverrides::builder().thousand_separator(",").build())
///         .build(),
/// );
/// assert_eq!(config.number.thousand_separator, ",");
/// assert_eq!(config.number.decimal_symbol, ".");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatConfig {
    pub currency: CurrencyConfig,
    pub number: NumberConfig,
    pub date_time: DateTimeConfig,
    pub short_month_names: [String; MONTHS_IN_YEAR],
    pub long_month_names: [String; MONTHS_IN_YEAR],
    pub short_day_names: [String; DAYS_IN_WEEK],
    pub long_day_names: [String; DAYS_IN_WEEK],
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyConfig::default(),
            number: NumberConfig::default(),
            date_time: DateTimeConfig::default(),
            short_month_names: SHORT_MONTH_NAMES.map(String::from),
            long_month_names: LONG_MONTH_NAMES.map(String::from),
            short_day_names: SHORT_DAY_NAMES.map(String::from),
            long_day_names: LONG_DAY_NAMES.map(String::from),
        }
    }
}

impl FormatConfig {
    /// The default config with `overrides` applied.
    pub fn with_overrides(overrides: &FormatOverrides) -> Self {
        let mut config = Self::default();
        config.apply(overrides);
        config
    }

    /// Overwrite every field that `overrides` sets.
    ///
    /// Name lists of the wrong length are skipped with a warning.
    pub fn apply(&mut self, overrides: &FormatOverrides) {
        if let Some(currency) = &overrides.currency {
            self.currency.apply(currency);
        }
        if let Some(number) = &overrides.number {
            self.number.apply(number);
        }
        if let Some(date_time) = &overrides.date_time {
            self.date_time.apply(date_time);
        }
        set_names(
            &mut self.short_month_names,
            overrides.short_month_names.as_deref(),
            "short_month_names",
        );
        set_names(
            &mut self.long_month_names,
            overrides.long_month_names.as_deref(),
            "long_month_names",
        );
        set_names(
            &mut self.short_day_names,
            overrides.short_day_names.as_deref(),
            "short_day_names",
        );
        set_names(
            &mut self.long_day_names,
            overrides.long_day_names.as_deref(),
            "long_day_names",
        );
    }
}

fn set<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

fn set_names<const N: usize>(target: &mut [String; N], names: Option<&[String]>, field: &str) {
    let Some(names) = names else {
        return;
    };
    match <[String; N]>::try_from(names.to_vec()) {
        Ok(names) => *target = names,
        Err(names) => warn!(
            field,
            expected = N,
            got = names.len(),
            "ignoring name list of the wrong length"
        ),
    }
}

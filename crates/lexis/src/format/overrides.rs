//! Partial format configuration, as found in a locale's `_formats` block.
//!
//! Every field is optional and unknown keys are ignored, so a locale file
//! only lists what differs from the defaults:
//!
//! ```json
//! {
//!   "_formats": {
//!     "currency": { "symbol": "€", "positive_format": "%q %c" },
//!     "number": { "decimal_symbol": ",", "thousand_separator": "." }
//!   }
//! }
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberOverrides {
    #[builder(into)]
    pub decimal_symbol: Option<String>,
    #[builder(into)]
    pub thousand_separator: Option<String>,
    pub fract_digits: Option<u8>,
    #[builder(into)]
    pub positive_symbol: Option<String>,
    #[builder(into)]
    pub negative_symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOverrides {
    #[builder(into)]
    pub symbol: Option<String>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub short_name: Option<String>,
    #[builder(into)]
    pub decimal_symbol: Option<String>,
    #[builder(into)]
    pub thousand_separator: Option<String>,
    pub fract_digits: Option<u8>,
    #[builder(into)]
    pub positive_symbol: Option<String>,
    #[builder(into)]
    pub negative_symbol: Option<String>,
    #[builder(into)]
    pub positive_format: Option<String>,
    #[builder(into)]
    pub negative_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeOverrides {
    #[builder(into)]
    pub long_time: Option<String>,
    #[builder(into)]
    pub short_time: Option<String>,
    #[builder(into)]
    pub long_date: Option<String>,
    #[builder(into)]
    pub short_date: Option<String>,
    #[builder(into)]
    pub long_date_time: Option<String>,
    #[builder(into)]
    pub short_date_time: Option<String>,
}

/// Changes to apply on top of a [`FormatConfig`](crate::FormatConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOverrides {
    pub currency: Option<CurrencyOverrides>,
    pub number: Option<NumberOverrides>,
    pub date_time: Option<DateTimeOverrides>,
    pub short_month_names: Option<Vec<String>>,
    pub long_month_names: Option<Vec<String>>,
    pub short_day_names: Option<Vec<String>>,
    pub long_day_names: Option<Vec<String>>,
}

impl FormatOverrides {
    /// Read overrides from a `_formats` value.
    ///
    /// ```
    /// use lexis::{FormatOverrides, Value};
    ///
    /// let raw = Value::from_json(r#"{"number": {"fract_digits": 0}, "color": "red"}"#).unwrap();
    /// let overrides = FormatOverrides::from_value(&raw).unwrap();
    /// assert_eq!(overrides.number.and_then(|n| n.fract_digits), Some(0));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).and_then(serde_json::from_value)
    }
}

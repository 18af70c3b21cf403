pub mod format;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use format::{
    CurrencyConfig, CurrencyOverrides, DateTimeConfig, DateTimeOverrides, FormatConfig,
    FormatOverrides, NumberConfig, NumberOverrides, format_date, format_number, format_price,
};
pub use interpreter::{
    LoadError, LoadWarning, LocaleDataset, Translator, compute_suggestions, plural_category,
    resolve_fallbacks,
};
pub use types::{CalendarBreakdown, Map, Value};

/// Creates an object [`Value`] from key-value pairs, for the tree API.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings or nested values directly.
///
/// # Example
///
/// ```
/// use lexis::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.get("count").and_then(Value::as_i64), Some(3));
/// assert_eq!(p.get("name").and_then(Value::as_str), Some("Alice"));
///
/// let nested = params! { "user" => params! { "name" => "Bo" } };
/// assert_eq!(nested.get_path("user.name").and_then(Value::as_str), Some("Bo"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Value::object()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Map::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            $crate::Value::Object(map)
        }
    };
}

/// Creates the ordered `Vec<String>` taken by the positional API.
///
/// Each argument goes through `Into<Value>` and [`Value::to_text`]: strings
/// pass through and numbers use their shortest decimal form.
///
/// ```
/// use lexis::positional;
///
/// assert_eq!(positional!["Ada", 3, 2.5], ["Ada", "3", "2.5"]);
/// ```
#[macro_export]
macro_rules! positional {
    [] => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    [ $($arg:expr),+ $(,)? ] => {
        ::std::vec![ $( ::std::convert::Into::<$crate::Value>::into($arg).to_text() ),+ ]
    };
}

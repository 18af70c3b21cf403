//! Format command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lexis::{CalendarBreakdown, Translator};
use miette::{miette, IntoDiagnostic, WrapErr};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::load_dir;

/// What to render.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatKind {
    Number,
    Price,
    Date,
}

/// Arguments for the format command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Kind of value to render
    #[arg(value_enum)]
    pub kind: FormatKind,

    /// Numeric value (required for number and price)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Directory of `<locale>.json` files whose `_formats` blocks apply
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Locale whose formats are used
    #[arg(long, short = 'l')]
    pub locale: Option<String>,

    /// Date pattern or alias (e.g., "short_date", "%d/%m/%Y")
    #[arg(long)]
    pub pattern: Option<String>,

    /// RFC 3339 timestamp to render instead of the current time
    #[arg(long)]
    pub at: Option<String>,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let mut translator = match &args.dir {
        Some(dir) => load_dir(dir)?,
        None => Translator::new(),
    };
    if let Some(locale) = &args.locale {
        translator.set_locale(locale.as_str());
    }

    let output = match args.kind {
        FormatKind::Number => translator.format_number(required_value(&args)?),
        FormatKind::Price => translator.format_price(required_value(&args)?),
        FormatKind::Date => {
            let date = args.at.as_deref().map(parse_timestamp).transpose()?;
            translator.format_date(args.pattern.as_deref(), date.as_ref())
        }
    };

    println!("{output}");
    Ok(exitcode::OK)
}

fn required_value(args: &FormatArgs) -> miette::Result<f64> {
    args.value
        .ok_or_else(|| miette!("a numeric value is required to format a {:?}", args.kind))
}

/// Calendar fields of an RFC 3339 timestamp, in the timestamp's own offset.
fn parse_timestamp(raw: &str) -> miette::Result<CalendarBreakdown> {
    let parsed = OffsetDateTime::parse(raw, &Rfc3339)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid RFC 3339 timestamp: {raw}"))?;
    Ok(CalendarBreakdown::from(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_keep_their_offset() {
        let date = parse_timestamp("2024-02-29T13:05:09+02:00").unwrap();
        assert_eq!(date.hour, 13);
        assert_eq!(date.day, 29);
        assert_eq!(date.month, 1);
        assert_eq!(date.weekday, 4);
        assert_eq!(date.year, 2024);
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}

//! Eval command implementation.

use std::path::PathBuf;

use clap::Args;
use lexis::Value;
use miette::miette;
use serde::Serialize;

use super::load_dir;

/// Arguments for the eval command.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Translation key in dotted form (e.g., "menu.file.open")
    pub key: String,

    /// Directory of `<locale>.json` files
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,

    /// Active locale, most preferred first (repeatable)
    #[arg(long, short = 'l')]
    pub locale: Vec<String>,

    /// Fallback locale tried after the active ones ("" disables it)
    #[arg(long)]
    pub fallback: Option<String>,

    /// Named parameters (e.g., -p name=Ada -p count=3)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Positional arguments for `{}` and `{N}` placeholders
    #[arg(long = "arg")]
    pub args: Vec<String>,

    /// Count used to pick a plural form
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse a key=value pair.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no '=' found in '{s}'"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Parameter text as a number when it reads as one.
fn param_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::Integer(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::Float(f)
    } else {
        Value::from(raw)
    }
}

/// JSON output for eval.
#[derive(Serialize)]
struct EvalResult {
    key: String,
    result: String,
    found: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

/// Run the eval command.
///
/// Unknown keys still print whatever the translator returns, along with
/// close matches, and exit with `DATAERR`.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut translator = load_dir(&args.dir)?;
    if !args.locale.is_empty() {
        translator.set_locales(args.locale.iter().cloned());
    }
    if let Some(fallback) = &args.fallback {
        translator.set_fallback_locale(fallback.as_str());
    }

    let result = if !args.args.is_empty() {
        match args.count {
            Some(count) => translator.tr_plural_with(&args.key, count, &args.args),
            None => translator.tr_with(&args.key, &args.args),
        }
    } else {
        let mut params = Value::object();
        for (name, raw) in &args.params {
            params.insert(name.as_str(), param_value(raw));
        }
        if let Some(count) = args.count {
            params.insert("count", count);
        }
        translator.translate(&args.key, &params)
    };

    let found = translator.key_exists(&args.key);
    let suggestions = if found {
        Vec::new()
    } else {
        translator.suggest_keys(&args.key)
    };

    if args.json {
        let output = EvalResult {
            key: args.key,
            result,
            found,
            suggestions,
        };
        let json = serde_json::to_string_pretty(&output).map_err(|e| miette!("{}", e))?;
        println!("{json}");
    } else {
        println!("{result}");
        if !found {
            eprintln!("warning: key '{}' not found", args.key);
            if !suggestions.is_empty() {
                eprintln!("  did you mean: {}", suggestions.join(", "));
            }
        }
    }

    if found {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

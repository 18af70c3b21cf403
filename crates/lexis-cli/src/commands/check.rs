//! Check command implementation.

use std::path::PathBuf;

use clap::Args;
use lexis::Translator;
use miette::miette;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::load_report;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Locale files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of loading one file.
#[derive(Serialize)]
struct FileReport {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    keys: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
///
/// Each file is loaded on its own so one broken file does not hide problems
/// in the others. Exits with `DATAERR` if any file fails.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let mut translator = Translator::new();
        let file = path.display().to_string();
        match translator.load_locale_from_file(path) {
            Ok(locale) => {
                let keys = translator.dataset().translation_keys(&locale).len();
                if !args.json {
                    println!(
                        "{} {file}: {keys} keys ({locale})",
                        "ok".if_supports_color(Stream::Stdout, |t| t.green())
                    );
                }
                reports.push(FileReport {
                    file,
                    locale: Some(locale),
                    keys,
                    error: None,
                });
            }
            Err(err) => {
                let message = err.to_string();
                if !args.json {
                    eprintln!("{:?}", load_report(err));
                }
                reports.push(FileReport {
                    file,
                    locale: None,
                    keys: 0,
                    error: Some(message),
                });
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| miette!("{}", e))?;
        println!("{json}");
    }

    if reports.iter().any(|r| r.error.is_some()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

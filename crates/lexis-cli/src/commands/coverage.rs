//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use lexis::{LoadWarning, Translator};
use miette::miette;
use serde::Serialize;

use crate::output::load_report;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale file every translation is compared against
    #[arg(long, required = true)]
    pub source: PathBuf,

    /// Target locales to check (comma-separated, e.g., "es,fr,de")
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Directory holding `<locale>.json` files (defaults to the source's directory)
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with error if any translations are missing
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one locale.
#[derive(Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    extra: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> miette::Result<i32> {
    let mut translator = Translator::new();
    let source = translator
        .load_locale_from_file(&args.source)
        .map_err(load_report)?;
    let source_keys = translator.dataset().translation_keys(&source);

    let dir = match args.translations {
        Some(dir) => dir,
        None => args
            .source
            .parent()
            .map(PathBuf::from)
            .ok_or_else(|| miette!("cannot determine directory of {}", args.source.display()))?,
    };

    let mut coverage = Vec::with_capacity(args.lang.len());
    for locale in &args.lang {
        let path = dir.join(format!("{locale}.json"));
        if path.exists() {
            translator.load_locale(locale, &path).map_err(load_report)?;
        }

        let mut missing = Vec::new();
        let mut extra = Vec::new();
        if translator.dataset().contains(locale) {
            for warning in translator.validate_locale(&source, locale) {
                match warning {
                    LoadWarning::MissingKey { key, .. } => missing.push(key),
                    LoadWarning::UnknownKey { key, .. } => extra.push(key),
                }
            }
        } else {
            missing.clone_from(&source_keys);
        }

        coverage.push(LocaleCoverage {
            locale: locale.clone(),
            translated: source_keys.len() - missing.len(),
            missing,
            extra,
        });
    }

    if args.json {
        let entries: Vec<CoverageJson> = coverage
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_keys.len(),
                missing: c.missing.clone(),
                extra: c.extra.clone(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&entries).map_err(|e| miette!("{}", e))?;
        println!("{json}");
    } else {
        println!("{}", format_coverage_table(source_keys.len(), &coverage));

        for entry in &coverage {
            if !entry.missing.is_empty() {
                println!("\nMissing in {}:", entry.locale);
                for key in &entry.missing {
                    println!("  {key}");
                }
            }
        }
    }

    if args.strict && coverage.iter().any(|c| !c.missing.is_empty()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

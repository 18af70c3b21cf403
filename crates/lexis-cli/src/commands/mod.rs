//! CLI command implementations.

mod check;
mod coverage;
mod eval;
mod format;

use std::fs;
use std::path::{Path, PathBuf};

use lexis::Translator;
use miette::{IntoDiagnostic, WrapErr};
use tracing::debug;

use crate::output::load_report;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};
pub use format::{run_format, FormatArgs};

/// Every `*.json` file directly inside `dir`, sorted by path.
fn json_files(dir: &Path) -> miette::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read directory: {}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Build a translator holding every locale file in `dir`.
fn load_dir(dir: &Path) -> miette::Result<Translator> {
    let mut translator = Translator::new();
    for path in json_files(dir)? {
        let locale = translator
            .load_locale_from_file(&path)
            .map_err(load_report)?;
        debug!(%locale, path = %path.display(), "loaded locale file");
    }
    Ok(translator)
}

//! Miette diagnostic wrapper for locale file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs;
use std::path::Path;

use lexis::LoadError;
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed locale JSON.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON: {message}")]
#[diagnostic(code(lexis::json))]
pub struct LexisDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LexisDiagnostic {
    /// Create a diagnostic pointing at a 1-based line and column.
    pub fn at_position(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: &str,
    ) -> Self {
        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        // serde_json appends the position, which the label already shows.
        let message = message
            .split(" at line ")
            .next()
            .unwrap_or(message)
            .to_string();

        LexisDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: Some("locale files must contain a single JSON object".to_string()),
        }
    }
}

/// Turn a load failure into a report. JSON syntax errors get source context.
pub fn load_report(err: LoadError) -> Report {
    match err {
        LoadError::Parse {
            path,
            line,
            column,
            message,
        } => {
            let content = fs::read_to_string(&path).unwrap_or_default();
            LexisDiagnostic::at_position(&path, &content, line, column, &message).into()
        }
        other => miette!("{}", other),
    }
}

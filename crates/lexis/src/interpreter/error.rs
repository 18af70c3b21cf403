//! Error and warning types for loading locale data.
//!
//! Resolution itself never fails: missing keys fall back and malformed
//! translation data renders as a sentinel string. Only loading can error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading locale data.
///
/// Loading is all-or-nothing: when an error is returned, the translator is
/// left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a locale file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Locale data (or the whole dataset) is not a JSON object.
    #[error("locale data for '{locale}' must be an object")]
    NotAnObject { locale: String },

    /// The reserved `_formats` block could not be read as format overrides.
    #[error("invalid _formats block for '{locale}': {message}")]
    Formats { locale: String, message: String },

    /// No locale identifier could be derived from a file name.
    #[error("cannot infer a locale from file name '{path}'")]
    NoLocaleInPath { path: PathBuf },

    /// Attempted to reload a locale that was not loaded from a file.
    #[error("cannot reload '{locale}': was loaded from string, not file")]
    NoPathForReload { locale: String },
}

/// A non-fatal inconsistency between two loaded locales.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A key exists in the target locale but not in the source locale.
    #[error("'{key}' in '{locale}' does not exist in the source locale")]
    UnknownKey { key: String, locale: String },

    /// A key of the source locale is not translated in the target locale.
    #[error("'{key}' is missing from '{locale}'")]
    MissingKey { key: String, locale: String },
}

//! Parse error types for templates.

use thiserror::Error;

/// An error that occurred while scanning a template.
///
/// The scanners accept any input, so this only surfaces if a scanner stops
/// before the end of the text. Resolution treats it as "no placeholders".
#[derive(Debug, Error)]
pub enum ParseError {
    /// Scanning stopped before the end of input.
    #[error("template scan stopped at byte {offset}: {message}")]
    Incomplete { offset: usize, message: String },
}

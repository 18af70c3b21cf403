//! Template scanning.
//!
//! This module turns translation strings into a segment AST that the
//! interpolation engine renders. Parsing borrows from the source text and
//! never allocates per character.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::{parse_field_template, parse_positional_template};

//! Error types for the LS-8 program loader.

use thiserror::Error;

/// Errors produced while reading a program image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// A line is not an 8-digit binary literal.
    #[error("line {line}: invalid binary literal '{token}'")]
    InvalidLiteral { line: usize, token: String },
}

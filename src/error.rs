//! Error types for the dxfgraph library

use std::io;
use thiserror::Error;

/// Main error type for dxfgraph operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A group-code line did not parse as an integer.
    ///
    /// This aborts the whole parse; `line` is the 1-based physical line
    /// number of the offending key line.
    #[error("invalid group code at line {line}: '{value}'")]
    InvalidGroupCode { line: usize, value: String },

    /// The stream ended after a code line with no value line following it
    #[error("unexpected end of stream after group code {code} at line {line}")]
    UnexpectedEof { code: i32, line: usize },

    /// A value failed a numeric coercion requested by a handler
    #[error("invalid numeric value: '{0}'")]
    InvalidNumber(String),

    /// Error resolving or applying a character encoding
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Generic parse error with a human-readable message
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DxfError {
    /// The 1-based physical line number attached to this error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            DxfError::InvalidGroupCode { line, .. } => Some(*line),
            DxfError::UnexpectedEof { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for dxfgraph operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

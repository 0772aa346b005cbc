//! Custom error types for bd
//!
//! Every failure is terminal for the invocation, so the hierarchy is flat:
//! one variant per kind of problem the user can run into.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for bd operations
#[derive(Error, Debug)]
pub enum BdError {
    /// Missing or invalid command line arguments
    #[error("{0}")]
    Argument(String),

    /// Malformed `dd/mm/yyyy` date or unparsable numeric field
    #[error("{0}")]
    DateFormat(String),

    /// The birthday file cannot be opened, read, written or replaced
    #[error("{message} [{}]", .path.display())]
    ConfigIo { path: PathBuf, message: String },

    /// A record line has fewer than four fields
    #[error("Malformed config file on line #{line}")]
    MalformedConfig { line: usize },

    /// A record line has a numeric field outside the accepted bounds
    #[error("Invalid date on line #{line}")]
    InvalidDate { line: usize },

    /// A date given on the command line is outside the accepted bounds
    #[error("{0}")]
    Range(String),

    /// Remove target absent from the file
    #[error("Unable to find: {0}")]
    NotFound(String),

    /// History log errors
    #[error("History log error: {0}")]
    Audit(String),
}

impl BdError {
    /// Create a config I/O error for the given path
    pub fn config_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigIo {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for BdError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigIo {
            path: PathBuf::new(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Audit(err.to_string())
    }
}

/// Result type alias for bd operations
pub type BdResult<T> = Result<T, BdError>;

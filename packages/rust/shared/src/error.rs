//! Error types for vitae.
//!
//! Library crates use [`VitaeError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all vitae operations.
///
/// Every variant is fatal: the build stops at the first error and no page
/// is written.
#[derive(Debug, thiserror::Error)]
pub enum VitaeError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Malformed delimited data file.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A row lacks a column the loader needs.
    #[error("{}:{line}: missing field `{field}`", path.display())]
    MissingField {
        path: PathBuf,
        line: u64,
        field: String,
    },

    /// A date column that is not `DD.MM.YY`.
    #[error("invalid date in `{field}`: {value:?} ({source})")]
    Date {
        field: String,
        value: String,
        source: chrono::ParseError,
    },

    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, VitaeError>;

impl VitaeError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Typed error handling for deadmethod.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where. Note that
//! unresolvable declarations, types, and expressions inside a unit are
//! not errors at all: the analysis skips them silently and never aborts.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deadmethod operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum DeadmethodError {
    /// I/O error when reading files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed translation unit dump
    #[error("Parse error in {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
        /// Line number (1-indexed) if available
        line: Option<usize>,
        /// Column number (1-indexed) if available
        column: Option<usize>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DeadmethodError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error without location.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Create a parse error with line/column info.
    pub fn parse_at(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (analysis of other units can
    /// continue).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for deadmethod results.
pub type DeadmethodResult<T> = Result<T, DeadmethodError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DeadmethodResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DeadmethodResult<T> {
        self.map_err(|e| DeadmethodError::io(path, e))
    }
}

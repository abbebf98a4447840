//! Typed error handling for djunused.
//!
//! Missing template or application directories are never errors; they simply
//! contribute nothing. What remains is I/O on corpus files, undecodable
//! lines, a malformed manifest, and failures building the match index.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for djunused operations.
#[derive(Error, Debug)]
pub enum DjunusedError {
    /// I/O error when opening or reading a file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A scanned file contains a line that is not valid UTF-8.
    ///
    /// This aborts the whole scan.
    #[error("Decode error in {path} at line {line}: stream did not contain valid UTF-8")]
    Decode {
        path: PathBuf,
        /// Line number (1-indexed)
        line: usize,
    },

    /// Manifest errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The reference match index could not be compiled
    #[error("Index error: {message}")]
    Index { message: String },
}

impl DjunusedError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a decode error for the given 1-based line.
    pub fn decode(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::Decode {
            path: path.into(),
            line,
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an index error.
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index {
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Decode { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the offending line number for decode errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decode { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Convenience type alias for djunused results.
pub type DjunusedResult<T> = Result<T, DjunusedError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DjunusedResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DjunusedResult<T> {
        self.map_err(|e| DjunusedError::io(path, e))
    }
}

//! Error types for ckpe-fs

use std::path::PathBuf;

use crate::guard::Operation;

/// Result type for ckpe-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ckpe-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The {operation} filename must be '{expected}'\nSelected file: '{actual}'")]
    FileNameMismatch {
        operation: Operation,
        expected: String,
        actual: String,
    },

    #[error("Lock acquisition failed for {path}: {source}")]
    LockFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize settings for {path}: {message}")]
    ConfigSerialize { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

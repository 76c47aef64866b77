//! Error types for emission

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing generated output
#[derive(Debug, Error)]
pub enum EmitError {
    /// A stale destination could not be removed
    #[error("failed to clear {path}: {source}")]
    Clear {
        /// The destination file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The destination could not be opened or appended to
    #[error("failed to write {path}: {source}")]
    Write {
        /// The destination file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result alias for emission operations
pub type EmitResult<T> = Result<T, EmitError>;

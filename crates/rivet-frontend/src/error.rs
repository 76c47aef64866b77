//! Error types for snapshot loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading semantic snapshots
#[derive(Debug, Error)]
pub enum FrontendError {
    /// No snapshot paths were given
    #[error("no snapshot files given")]
    NoSnapshots,

    /// Snapshot file could not be read
    #[error("failed to read snapshot {path}: {source}")]
    Unreadable {
        /// Path to the snapshot file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Snapshot file is not valid snapshot JSON
    #[error("failed to parse snapshot {path}: {source}")]
    Malformed {
        /// Path to the snapshot file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },
}

/// Result alias for frontend operations
pub type FrontendResult<T> = Result<T, FrontendError>;

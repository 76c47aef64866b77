//! Snapshot loading
//!
//! Loads one or more semantic snapshot files and merges them into a single
//! [`Workspace`]. A snapshot that cannot be read or parsed aborts the load
//! immediately; there is nothing useful the engine can do with a partial
//! view of the program.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FrontendError, FrontendResult};
use crate::model::Workspace;

/// Load and merge semantic snapshots from the given paths.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> FrontendResult<Workspace> {
    if paths.is_empty() {
        return Err(FrontendError::NoSnapshots);
    }

    let mut modules = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let snapshot = load_file(path)?;
        tracing::debug!(
            path = %path.display(),
            modules = snapshot.modules.len(),
            "loaded snapshot"
        );
        modules.extend(snapshot.modules);
    }

    Ok(Workspace { modules })
}

fn load_file(path: &Path) -> FrontendResult<Workspace> {
    let data = fs::read_to_string(path).map_err(|source| FrontendError::Unreadable {
        path: PathBuf::from(path),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| FrontendError::Malformed {
        path: PathBuf::from(path),
        source,
    })
}

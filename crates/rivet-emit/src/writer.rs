//! Destination file management
//!
//! Generated output is grouped by destination, and a destination may
//! receive several units across one run. The contract is idempotence per
//! run: the first write to a destination removes any stale file from a
//! previous run, every later write appends, so re-running generation never
//! doubles output.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{EmitError, EmitResult};

/// Append-mode writer that clears each destination once per run
#[derive(Debug, Default)]
pub struct DestinationWriter {
    cleared: HashSet<PathBuf>,
}

impl DestinationWriter {
    /// Create a writer with no cleared destinations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write rendered source to a destination.
    ///
    /// Removes the destination the first time it is seen this run; a
    /// missing file is not an error. All writes append.
    pub fn write(&mut self, path: &Path, content: &str) -> EmitResult<()> {
        if !self.cleared.contains(path) {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(EmitError::Clear {
                        path: path.to_path_buf(),
                        source: err,
                    });
                }
            }
            self.cleared.insert(path.to_path_buf());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| EmitError::Write {
                path: path.to_path_buf(),
                source: err,
            })?;
        file.write_all(content.as_bytes())
            .map_err(|err| EmitError::Write {
                path: path.to_path_buf(),
                source: err,
            })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote destination");
        Ok(())
    }
}

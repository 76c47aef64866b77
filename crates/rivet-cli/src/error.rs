//! CLI-level errors

use thiserror::Error;

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or parsing a workspace snapshot failed
    #[error(transparent)]
    Frontend(#[from] rivet_frontend::FrontendError),

    /// Extraction failed
    #[error(transparent)]
    Scan(#[from] rivet_scan::ScanError),

    /// A batch-global resolution step failed
    #[error(transparent)]
    Resolve(#[from] rivet_resolve::ResolveError),

    /// Writing a destination failed
    #[error(transparent)]
    Emit(#[from] rivet_emit::EmitError),

    /// The workspace declared no containers at all
    #[error("no container found")]
    NoContainers,

    /// At least one container failed; per-container errors were already
    /// reported on stderr
    #[error("generation failed")]
    GenerationFailed,
}

/// Result alias for command execution
pub type CliResult<T> = Result<T, CliError>;

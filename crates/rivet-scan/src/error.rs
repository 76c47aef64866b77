//! Error types for extraction

use thiserror::Error;

/// Errors in the `inject` tag grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// Directive token is not `key:value`
    #[error("invalid directive")]
    Malformed,

    /// Directive key is not recognized
    #[error("unknown directive key {0:?}")]
    UnknownKey(String),

    /// Directive key requires a non-empty value
    #[error("{0} requires a value")]
    EmptyValue(String),

    /// Directive key appears more than once in one tag
    #[error("{0} already set")]
    DuplicateKey(String),
}

/// Errors that can occur during extraction
#[derive(Debug, Error)]
pub enum ScanError {
    /// The workspace holds no modules at all
    #[error("no modules in workspace")]
    NoModules,

    /// A field carries a malformed `inject` tag
    #[error("{position}: invalid inject tag: {source}")]
    InvalidTag {
        /// Position of the offending field
        position: String,
        /// Grammar error detail
        source: DirectiveError,
    },

    /// Several extraction errors, one per line
    #[error("{}", join_lines(.0))]
    Multiple(Vec<ScanError>),
}

impl ScanError {
    /// Collapse a list of errors into one, unwrapping the single-error case.
    pub fn multiple(mut errors: Vec<ScanError>) -> ScanError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            ScanError::Multiple(errors)
        }
    }
}

fn join_lines(errors: &[ScanError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result alias for extraction operations
pub type ScanResult<T> = Result<T, ScanError>;

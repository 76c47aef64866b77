//! Error types for resolution

use rivet_frontend::TypeKey;
use thiserror::Error;

/// Errors that can occur while building or ordering a dependency graph
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The front end marked a needed type as unresolved
    #[error("{position}: type information is missing for {what}")]
    MissingTypeInfo {
        /// Position of the offending declaration
        position: String,
        /// Which declaration lacks type info
        what: String,
    },

    /// Two or more eligible providers share a qualified name
    #[error("provider name conflicts:\n{0}")]
    NameConflicts(String),

    /// A directive names a provider that does not exist
    #[error("provider {name:?} not found")]
    ProviderNotFound {
        /// The name the directive asked for
        name: String,
    },

    /// A short-name fallback matched more than one provider
    #[error("provider name {name:?} is ambiguous")]
    AmbiguousProviderName {
        /// The short name the directive asked for
        name: String,
    },

    /// No provider produces the requested type
    #[error("no provider for {}{}", .ty, required_by_suffix(.required_by))]
    NoProvider {
        /// The requested type
        ty: TypeKey,
        /// The provider whose parameter asked for it, if any
        required_by: Option<String>,
    },

    /// More than one provider produces the requested type
    #[error("multiple providers for {}{}", .ty, required_by_suffix(.required_by))]
    MultipleProviders {
        /// The requested type
        ty: TypeKey,
        /// The provider whose parameter asked for it, if any
        required_by: Option<String>,
    },

    /// A directive-selected provider does not produce the field's type
    #[error("provider {provider} returns {returns}, but field {field} requires {requires}")]
    ResultTypeMismatch {
        /// Qualified name of the selected provider
        provider: String,
        /// What the provider produces
        returns: TypeKey,
        /// The field that carried the directive
        field: String,
        /// What the field requires
        requires: TypeKey,
    },

    /// A provider transitively depends on itself
    #[error("circular dependency detected at {provider}")]
    CircularDependency {
        /// Qualified name of a provider on the cycle
        provider: String,
    },

    /// Several resolution errors, one per line
    #[error("{}", join_lines(.0))]
    Multiple(Vec<ResolveError>),
}

impl ResolveError {
    /// Collapse a list of errors into one, unwrapping the single-error case.
    pub fn multiple(mut errors: Vec<ResolveError>) -> ResolveError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            ResolveError::Multiple(errors)
        }
    }
}

fn required_by_suffix(required_by: &Option<String>) -> String {
    match required_by {
        Some(provider) => format!(" (required by {provider})"),
        None => String::new(),
    }
}

fn join_lines(errors: &[ResolveError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

//! Declaration model for resolution
//!
//! Passive data shared by the graph builder and the orderer. Providers are
//! immutable once converted and are identified by [`ProviderId`], a stable
//! index into the batch provider table, so dedup and cycle detection key
//! on identity, never on value equality.

use std::fmt;

use rivet_frontend::TypeKey;
use rivet_scan::Directive;

/// Stable identity of a provider within one generation batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderId(pub(crate) usize);

impl ProviderId {
    /// Index into the batch provider table
    pub fn index(self) -> usize {
        self.0
    }
}

/// A candidate constructor function
#[derive(Debug, Clone)]
pub struct Provider {
    /// Module path of the declaring module (scope path)
    pub module_path: String,
    /// Local name of the declaring module
    pub module_name: String,
    /// Local function name
    pub name: String,
    /// Result type descriptor
    pub result: TypeKey,
    /// Dependency requirements, in parameter order
    pub params: Vec<TypeKey>,
    /// Whether the constructor also returns the built-in error.
    /// Reserved for future validation; resolution does not enforce it.
    pub may_fail: bool,
    /// `file:line:column` of the declaration
    pub position: String,
}

impl Provider {
    /// Globally unique `module_path.Name` identity
    pub fn qualified_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.module_path, self.name)
        }
    }

    /// Name suffix after the last scope separator
    pub fn short_name(&self) -> &str {
        &self.name
    }
}

/// Field name within a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldName {
    /// A concrete member name (or the type expression for anonymous fields)
    Named(String),
    /// The reserved blank placeholder: override-only, never emitted
    Blank,
}

impl FieldName {
    /// Whether this is the blank placeholder
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldName::Blank)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldName::Named(name) => f.write_str(name),
            FieldName::Blank => f.write_str("_"),
        }
    }
}

/// A container field ready for resolution
#[derive(Debug, Clone)]
pub struct ContainerField {
    /// Field name
    pub name: FieldName,
    /// Requested type descriptor
    pub ty: TypeKey,
    /// How the field selects its provider
    pub directive: Directive,
    /// `file:line:column` of the field
    pub position: String,
}

/// A container record ready for resolution
#[derive(Debug, Clone)]
pub struct Container {
    /// Module path of the declaring module
    pub module_path: String,
    /// Local name of the declaring module
    pub module_name: String,
    /// Record name
    pub name: String,
    /// `file:line:column` of the record
    pub position: String,
    /// Fields, in declaration order
    pub fields: Vec<ContainerField>,
}

impl Container {
    /// Name of the generated factory function
    pub fn factory_name(&self) -> String {
        format!("New{}", self.name)
    }

    /// Qualified `module.Name` form for diagnostics
    pub fn qualified_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.module_path, self.name)
        }
    }
}

//! Data model for semantic snapshots
//!
//! A snapshot is the front end's view of a program: modules holding
//! top-level declarations, with every type reference either resolved to a
//! canonical descriptor or explicitly marked unresolved. Positions are
//! plain `file:line:column` strings so diagnostics stay navigable without
//! the front end in the loop.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical, comparable identifier for a semantic type.
///
/// Two keys are equal iff they denote the same type. The front end decides
/// the canonical spelling (e.g. a fully qualified name such as
/// `example/infra.*Database`); the resolution engine only ever compares
/// keys and never interprets their content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeKey(String);

impl TypeKey {
    /// Create a type key from a canonical name
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The canonical name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Structural shape of a resolved type, as classified by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// A named record or nominal type
    Named,
    /// A pointer to a named type
    Pointer,
    /// An interface type, named or anonymous
    Interface,
    /// A language built-in (including the built-in error type)
    Builtin,
    /// Anything else (tuples, slices, functions, ...)
    Other,
}

/// A resolved type: canonical key plus structural shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Canonical type key
    pub key: TypeKey,
    /// Structural shape
    pub shape: TypeShape,
}

impl TypeInfo {
    /// Whether this is the built-in error type on its own
    pub fn is_builtin_error(&self) -> bool {
        self.shape == TypeShape::Builtin && self.key.as_str() == "error"
    }
}

/// A type reference as exported by the front end.
///
/// The front end marks references it failed to resolve explicitly rather
/// than omitting them; downstream stages turn `Unresolved` into per-item
/// errors instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum TypeRef {
    /// Fully resolved type
    Resolved(TypeInfo),
    /// Resolution failed in the front end
    Unresolved,
}

impl TypeRef {
    /// The resolved type info, if any
    pub fn info(&self) -> Option<&TypeInfo> {
        match self {
            TypeRef::Resolved(info) => Some(info),
            TypeRef::Unresolved => None,
        }
    }

    /// The resolved type key, if any
    pub fn key(&self) -> Option<&TypeKey> {
        self.info().map(|i| &i.key)
    }
}

/// A set of loaded source modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    /// Modules in the snapshot
    pub modules: Vec<SourceModule>,
}

/// One source module with its top-level declarations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceModule {
    /// Unique module path (e.g. `example/simple/infra`)
    pub path: String,
    /// Local module name (e.g. `infra`)
    pub name: String,
    /// Top-level function declarations
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
    /// Top-level record declarations
    #[serde(default)]
    pub records: Vec<RecordDecl>,
}

/// A top-level function declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Declared name
    pub name: String,
    /// True for member functions (methods); those are never providers
    #[serde(default)]
    pub method: bool,
    /// Parameter types, in declaration order
    #[serde(default)]
    pub params: Vec<TypeRef>,
    /// Result types, in declaration order
    #[serde(default)]
    pub results: Vec<TypeRef>,
    /// `file:line:column` of the declaration
    #[serde(default)]
    pub position: String,
}

/// A top-level record (struct) declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDecl {
    /// Declared name
    pub name: String,
    /// Fields, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    /// `file:line:column` of the declaration
    #[serde(default)]
    pub position: String,
}

/// One field of a record declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name; `None` for anonymous (embedded) fields, `"_"` for the
    /// blank placeholder
    #[serde(default)]
    pub name: Option<String>,
    /// Source spelling of the field type
    pub type_expr: String,
    /// Resolved field type
    pub ty: TypeRef,
    /// Raw annotation tag attached to the field, if any
    #[serde(default)]
    pub tag: Option<String>,
    /// `file:line:column` of the field
    #[serde(default)]
    pub position: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_equality() {
        let a = TypeKey::new("example/infra.*Database");
        let b = TypeKey::from("example/infra.*Database");
        let c = TypeKey::new("example/infra.Database");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_builtin_error_detection() {
        let err = TypeInfo {
            key: TypeKey::from("error"),
            shape: TypeShape::Builtin,
        };
        assert!(err.is_builtin_error());

        let named = TypeInfo {
            key: TypeKey::from("error"),
            shape: TypeShape::Named,
        };
        assert!(!named.is_builtin_error());
    }

    #[test]
    fn test_type_ref_serde_roundtrip() {
        let resolved = TypeRef::Resolved(TypeInfo {
            key: TypeKey::from("example/config.Config"),
            shape: TypeShape::Named,
        });
        let json = serde_json::to_string(&resolved).unwrap();
        assert!(json.contains("\"kind\":\"resolved\""));
        let back: TypeRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resolved);

        let unresolved: TypeRef = serde_json::from_str("{\"kind\":\"unresolved\"}").unwrap();
        assert_eq!(unresolved, TypeRef::Unresolved);
        assert!(unresolved.key().is_none());
    }

    #[test]
    fn test_module_defaults() {
        let module: SourceModule =
            serde_json::from_str("{\"path\":\"example/app\",\"name\":\"app\"}").unwrap();
        assert!(module.functions.is_empty());
        assert!(module.records.is_empty());
    }
}

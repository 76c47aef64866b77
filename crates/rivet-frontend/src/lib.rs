#![warn(missing_docs)]

//! Semantic source model for rivet.
//!
//! The host-language front end analyzes a program's source and exports a
//! JSON *semantic snapshot*: modules with their top-level function and
//! record declarations, every type already resolved to a canonical
//! descriptor. This crate defines that wire format and loads snapshots
//! from disk. Nothing here knows about injection; it is the boundary
//! between the front end and the resolution engine.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{FrontendError, FrontendResult};
pub use loader::load;
pub use model::{
    FieldDecl, FunctionDecl, RecordDecl, SourceModule, TypeInfo, TypeKey, TypeRef, TypeShape,
    Workspace,
};

#![warn(missing_docs)]

//! Container and provider extraction for rivet.
//!
//! Walks a loaded [`rivet_frontend::Workspace`] and pulls out the two kinds
//! of declarations the resolution engine cares about: record types with
//! `inject`-marked fields (containers) and eligible constructor functions
//! (providers). Also home of the small `inject` tag grammar.

pub mod containers;
pub mod error;
pub mod providers;
pub mod tags;

pub use containers::{collect_containers, ContainerSpec, FieldSpec};
pub use error::{DirectiveError, ScanError, ScanResult};
pub use providers::{collect_providers, ProviderSpec};
pub use tags::{parse_directive, Directive};

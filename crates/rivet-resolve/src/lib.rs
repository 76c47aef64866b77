#![warn(missing_docs)]

//! Dependency resolution engine for rivet.
//!
//! Takes the extracted containers and providers, resolves every container
//! field to a provider, recursively resolves each provider's own
//! dependencies into a shared graph, and linearizes that graph into a
//! deduplicated, dependency-first construction plan.
//!
//! Resolution is deterministic: the same containers and providers always
//! yield the same plan. Ambiguity is never broken silently: two candidate
//! providers for one type is an error unless a directive or override picks
//! one.

pub mod convert;
pub mod error;
pub mod graph;
pub mod model;
pub mod order;

pub use convert::{convert_container, convert_providers};
pub use error::{ResolveError, ResolveResult};
pub use graph::{build_graph, DependencyGraph, ProviderSet};
pub use model::{Container, ContainerField, FieldName, Provider, ProviderId};
pub use order::order_providers;

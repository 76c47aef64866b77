#![warn(missing_docs)]

//! Go source emission for rivet.
//!
//! Turns ordered construction plans into generated factory functions and
//! manages the destination files they land in. Containers that share a
//! destination are rendered into one file; the writer clears each
//! destination once per run and appends afterwards, so runs are
//! idempotent.

pub mod error;
pub mod render;
pub mod writer;

pub use error::{EmitError, EmitResult};
pub use render::{render, ContainerPlan, EmitUnit};
pub use writer::DestinationWriter;

#![warn(missing_docs)]

//! Command-line interface for rivet.
//!
//! Parses arguments, wires the pipeline crates together, and owns all
//! user-facing output. Exit codes: 0 on success, 1 on generation failure,
//! 2 on usage errors.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use router::{dispatch, Cli, Commands};

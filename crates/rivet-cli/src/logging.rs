//! Logging and verbosity control

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber based on CLI flags.
///
/// `RUST_LOG` takes precedence over the flags when set. Diagnostics go to
/// stderr; stdout is reserved for command output.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

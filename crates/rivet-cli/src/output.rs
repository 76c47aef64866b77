//! Output formatting and styling

use colored::Colorize;

/// Format a success line for stdout.
pub fn success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg)
}

/// Format an error line for stderr.
pub fn error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg)
}

/// Format an informational line.
pub fn info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue(), msg)
}

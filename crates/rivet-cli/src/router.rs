//! Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::error::CliResult;

/// rivet - build-time dependency injection for Go
#[derive(Parser, Debug)]
#[command(name = "rivet")]
#[command(bin_name = "rivet")]
#[command(about = "Build-time dependency injection code generator")]
#[command(version)]
#[command(author = "Rivet Contributors")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate container factories from workspace snapshots
    #[command(about = "Generate container factories from workspace snapshots")]
    Generate {
        /// Output file name, created next to each container's source file
        #[arg(short, long, default_value = "rivet_gen.go")]
        output: String,

        /// Workspace snapshot files produced by the front end
        #[arg(value_name = "SNAPSHOT", required = true)]
        snapshots: Vec<PathBuf>,
    },
}

/// Execute the parsed command.
pub fn dispatch(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Generate { output, snapshots } => {
            commands::generate::run(output, snapshots)
        }
    }
}

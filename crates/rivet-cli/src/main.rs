// rivet CLI entry point

use clap::Parser;
use rivet_cli::{dispatch, init_logging, output, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = dispatch(&cli) {
        eprintln!("{}", output::error(&err.to_string()));
        std::process::exit(1);
    }
}

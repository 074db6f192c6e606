//! Main entry point for the spray CLI.
//!
//! This is the command-line interface for the spray path-identifier indexer.
//! It provides commands for working with scenarios and configuration:
//! - `index`: Run a scenario and print the identifiers it produces
//! - `show-config`: Print the resolved configuration
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics through the logger chosen by the flags
    let logger = spray::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        eprintln!("WARN: a logger was already installed");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Index(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, IndexCommand, ShowConfigCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for computing hierarchical path identifiers.
#[derive(Parser)]
#[command(name = "spray")]
#[command(
    version,
    about = "Compute hierarchical path identifiers for tree documents",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file layered above discovered configuration
    #[arg(long, value_name = "PATH", global = true, env = "SPRAY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a scenario and print the identifiers it produces
    Index(IndexCommand),

    /// Print the resolved configuration
    ShowConfig(ShowConfigCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

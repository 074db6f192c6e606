//! Library exports for spray-cli.
//!
//! This module exports the CLI structure so it can be reused to generate
//! documentation and to test argument parsing.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

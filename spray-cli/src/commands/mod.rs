//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `index`: Run a scenario and print the identifiers it produces
//! - `show_config`: Print the resolved configuration
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod index;
pub mod show_config;
pub mod validate;

pub use completions::CompletionsCommand;
pub use index::IndexCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;

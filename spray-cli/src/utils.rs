//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and option resolution.

use crate::error::CliError;
use spray::{Config, ConfigBuilder, IndexerOptions};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line overrides (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(
    global: &GlobalOptions,
    overrides: Option<Config>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }
    if let Some(overrides) = overrides {
        builder = builder.with_config(overrides);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve a configuration into indexer options.
pub fn resolve_options(config: &Config) -> Result<IndexerOptions, CliError> {
    IndexerOptions::from_config(config).map_err(|e| CliError::Config(e.to_string()))
}

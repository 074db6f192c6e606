//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SPRAY_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use spray::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a malformed boolean or an unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(attribute) = env::var("SPRAY_INPUT_ATTRIBUTE") {
            config.input_attribute = Some(attribute);
        }

        if let Ok(attributes) = env::var("SPRAY_OUTPUT_ATTRIBUTES") {
            config.output_attributes = Some(Self::parse_list(&attributes));
        }

        if let Ok(separator) = env::var("SPRAY_SEPARATOR") {
            config.separator = Some(separator);
        }

        if let Ok(val) = env::var("SPRAY_FORCE_INDEX") {
            config.force_index = Some(Self::parse_bool("SPRAY_FORCE_INDEX", &val)?);
        }

        // Prefix and suffix may legitimately be set to the empty string.
        if let Ok(prefix) = env::var("SPRAY_INDEX_PREFIX") {
            config.index_prefix = Some(prefix);
        }

        if let Ok(suffix) = env::var("SPRAY_INDEX_SUFFIX") {
            config.index_suffix = Some(suffix);
        }

        if let Ok(anchor) = env::var("SPRAY_ANCHOR") {
            config.anchor = Some(anchor);
        }

        if let Ok(format) = env::var("SPRAY_OUTPUT_FORMAT") {
            config.output_format =
                Some(OutputFormat::parse(&format).map_err(|message| Error::Validation {
                    field: "SPRAY_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        Ok(())
    }

    /// Parse a comma-separated list, dropping blank entries.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Parse a boolean environment value.
    ///
    /// Accepts `true/false`, `1/0`, `yes/no` and `on/off` (case-insensitive).
    fn parse_bool(name: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: name.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}

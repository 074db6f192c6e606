//! Configuration validation.
//!
//! Rejects configurations that would make identifiers ambiguous or that the
//! host could not store, before an indexer is ever built from them.

use crate::config::schema::{Config, DEFAULT_INPUT_ATTRIBUTE};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use spray::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { separator: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Unset fields fall back to their defaults, which are always valid.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref input) = config.input_attribute {
            Self::validate_attribute_name("input_attribute", input)?;
        }

        if let Some(ref outputs) = config.output_attributes {
            let input = config
                .input_attribute
                .as_deref()
                .unwrap_or(DEFAULT_INPUT_ATTRIBUTE);
            Self::validate_output_attributes(outputs, input)?;
        }

        if let Some(ref separator) = config.separator {
            if separator.is_empty() {
                return Err(Error::Validation {
                    field: "separator".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref prefix) = config.index_prefix {
            Self::validate_index_prefix(prefix)?;
        }

        if let Some(ref suffix) = config.index_suffix {
            if suffix.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(Error::Validation {
                    field: "index_suffix".into(),
                    message: "Cannot start with a digit".into(),
                });
            }
        }

        if let Some(ref anchor) = config.anchor {
            Self::validate_attribute_name("anchor", anchor)?;
        }

        Ok(())
    }

    /// Validate the list of output attributes.
    ///
    /// The list must be non-empty and free of duplicates, and must not
    /// contain the input attribute: writing identifiers there would change
    /// the base identifiers they are derived from.
    fn validate_output_attributes(outputs: &[String], input: &str) -> Result<()> {
        if outputs.is_empty() {
            return Err(Error::Validation {
                field: "output_attributes".into(),
                message: "At least one output attribute is required".into(),
            });
        }

        let mut seen = HashSet::new();
        for (i, name) in outputs.iter().enumerate() {
            let field = format!("output_attributes[{i}]");
            Self::validate_attribute_name(&field, name)?;

            if name == input {
                return Err(Error::Validation {
                    field,
                    message: format!("'{name}' is also the input attribute"),
                });
            }

            if !seen.insert(name.as_str()) {
                return Err(Error::Validation {
                    field,
                    message: format!("Duplicate output attribute: {name}"),
                });
            }
        }

        Ok(())
    }

    /// The prefix must be non-empty and must not end with a digit, otherwise
    /// a base identifier ending in digits (`h1`) could not be told apart from
    /// an indexed one.
    fn validate_index_prefix(prefix: &str) -> Result<()> {
        if prefix.is_empty() {
            return Err(Error::Validation {
                field: "index_prefix".into(),
                message: "Cannot be empty".into(),
            });
        }

        if prefix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(Error::Validation {
                field: "index_prefix".into(),
                message: "Cannot end with a digit".into(),
            });
        }

        Ok(())
    }

    /// Attribute and kind names: non-empty, no whitespace, control characters
    /// or markup delimiters.
    fn validate_attribute_name(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if let Some(c) = value
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '='))
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid character {c:?} in '{value}'"),
            });
        }

        Ok(())
    }
}

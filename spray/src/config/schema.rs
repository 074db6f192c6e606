//! Configuration schema definitions.
//!
//! This module defines the layered configuration structure for spray. Every
//! field is optional so that files, environment variables and programmatic
//! overrides can be merged; [`IndexerOptions`](super::IndexerOptions) is the
//! resolved form the indexer consumes.

use serde::{Deserialize, Serialize};

/// Default attribute a host node uses to declare an explicit segment.
pub const DEFAULT_INPUT_ATTRIBUTE: &str = "data-spray";

/// Default attribute receiving the computed identifier.
pub const DEFAULT_OUTPUT_ATTRIBUTE: &str = "data-id";

/// Default separator between path segments.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default text before a sibling index.
pub const DEFAULT_INDEX_PREFIX: &str = "[";

/// Default text after a sibling index.
pub const DEFAULT_INDEX_SUFFIX: &str = "]";

/// Default kind of the ancestor that bounds every path.
pub const DEFAULT_ANCHOR: &str = "body";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use spray::config::Config;
///
/// let config = Config {
///     separator: Some("-".to_string()),
///     force_index: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(config.separator.as_deref(), Some("-"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Attribute a node uses to declare its own base identifier.
    pub input_attribute: Option<String>,

    /// Attributes that receive the computed identifier.
    pub output_attributes: Option<Vec<String>>,

    /// String joining path segments.
    pub separator: Option<String>,

    /// Append a sibling index even to nodes without same-kind siblings.
    pub force_index: Option<bool>,

    /// Text placed before a sibling index.
    pub index_prefix: Option<String>,

    /// Text placed after a sibling index.
    pub index_suffix: Option<String>,

    /// Kind of the ancestor that bounds path derivation.
    pub anchor: Option<String>,

    /// Output format for reports.
    pub output_format: Option<OutputFormat>,
}

/// Output format for identifier reports.
///
/// # Examples
///
/// ```
/// use spray::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `identifier<TAB>name` line per element.
    #[default]
    Text,
    /// JSON array.
    Json,
    /// YAML sequence.
    Yaml,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message for unknown names.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.separator.is_none());
        assert!(config.output_attributes.is_none());
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_yaml::from_str("yaml").unwrap();
        assert_eq!(format, OutputFormat::Yaml);

        let serialized = serde_yaml::to_string(&OutputFormat::Json).unwrap();
        assert!(serialized.contains("json"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("TEXT").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::parse("csv").is_err());
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let yaml = r"
separator: '-'
unknown_field: value
";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config() {
        let yaml = r"
input_attribute: data-input
output_attributes:
  - data-eid
  - data-testid
separator: '-'
force_index: true
index_prefix: ':'
index_suffix: ''
anchor: main
output_format: json
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.input_attribute.as_deref(), Some("data-input"));
        assert_eq!(
            config.output_attributes,
            Some(vec!["data-eid".to_string(), "data-testid".to_string()])
        );
        assert_eq!(config.separator.as_deref(), Some("-"));
        assert_eq!(config.force_index, Some(true));
        assert_eq!(config.index_prefix.as_deref(), Some(":"));
        assert_eq!(config.index_suffix.as_deref(), Some(""));
        assert_eq!(config.anchor.as_deref(), Some("main"));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }
}

//! Resolved indexer options and the segment grammar they define.

use crate::config::schema::{
    Config, DEFAULT_ANCHOR, DEFAULT_INDEX_PREFIX, DEFAULT_INDEX_SUFFIX, DEFAULT_INPUT_ATTRIBUTE,
    DEFAULT_OUTPUT_ATTRIBUTE, DEFAULT_SEPARATOR,
};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Fully resolved, immutable settings of an [`Indexer`](crate::Indexer).
///
/// A segment is either a bare base identifier or
/// `base + index_prefix + index + index_suffix`.
///
/// # Examples
///
/// ```
/// use spray::IndexerOptions;
///
/// let options = IndexerOptions::default();
/// assert_eq!(options.format_segment("div", 2), "div[2]");
/// assert_eq!(options.split_segment("div[2]"), ("div", Some(2)));
/// assert_eq!(options.split_segment("div"), ("div", None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerOptions {
    /// Attribute a node uses to declare its own base identifier.
    pub input_attribute: String,
    /// Attributes that receive the computed identifier.
    pub output_attributes: Vec<String>,
    /// String joining path segments.
    pub separator: String,
    /// Append an index even when a node has no same-kind siblings.
    pub force_index: bool,
    /// Text placed before a sibling index.
    pub index_prefix: String,
    /// Text placed after a sibling index.
    pub index_suffix: String,
    /// Kind of the ancestor that bounds every path.
    pub anchor: String,
}

impl Default for IndexerOptions {
    fn default() -> Self {
        Self {
            input_attribute: DEFAULT_INPUT_ATTRIBUTE.to_string(),
            output_attributes: vec![DEFAULT_OUTPUT_ATTRIBUTE.to_string()],
            separator: DEFAULT_SEPARATOR.to_string(),
            force_index: false,
            index_prefix: DEFAULT_INDEX_PREFIX.to_string(),
            index_suffix: DEFAULT_INDEX_SUFFIX.to_string(),
            anchor: DEFAULT_ANCHOR.to_string(),
        }
    }
}

impl IndexerOptions {
    /// Resolve a configuration against the defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use spray::config::Config;
    /// use spray::IndexerOptions;
    ///
    /// let config = Config { separator: Some("-".to_string()), ..Default::default() };
    /// let options = IndexerOptions::from_config(&config).unwrap();
    /// assert_eq!(options.separator, "-");
    /// assert_eq!(options.anchor, "body");
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        ConfigValidator::validate(config)?;

        let defaults = Self::default();
        Ok(Self {
            input_attribute: config
                .input_attribute
                .clone()
                .unwrap_or(defaults.input_attribute),
            output_attributes: config
                .output_attributes
                .clone()
                .unwrap_or(defaults.output_attributes),
            separator: config.separator.clone().unwrap_or(defaults.separator),
            force_index: config.force_index.unwrap_or(defaults.force_index),
            index_prefix: config.index_prefix.clone().unwrap_or(defaults.index_prefix),
            index_suffix: config.index_suffix.clone().unwrap_or(defaults.index_suffix),
            anchor: config
                .anchor
                .as_deref()
                .map_or(defaults.anchor, str::to_lowercase),
        })
    }

    /// Render a configuration equivalent to these options.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            input_attribute: Some(self.input_attribute.clone()),
            output_attributes: Some(self.output_attributes.clone()),
            separator: Some(self.separator.clone()),
            force_index: Some(self.force_index),
            index_prefix: Some(self.index_prefix.clone()),
            index_suffix: Some(self.index_suffix.clone()),
            anchor: Some(self.anchor.clone()),
            output_format: None,
        }
    }

    /// Use `separator` between segments.
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Always (or only when needed) append sibling indices.
    #[must_use]
    pub fn with_force_index(mut self, force_index: bool) -> Self {
        self.force_index = force_index;
        self
    }

    /// Bracket sibling indices with `prefix` and `suffix`.
    #[must_use]
    pub fn with_index_affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.index_prefix = prefix.to_string();
        self.index_suffix = suffix.to_string();
        self
    }

    /// Read explicit base identifiers from `attribute`.
    #[must_use]
    pub fn with_input_attribute(mut self, attribute: &str) -> Self {
        self.input_attribute = attribute.to_string();
        self
    }

    /// Write identifiers to each of `attributes`.
    #[must_use]
    pub fn with_output_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Bound paths by the nearest ancestor of kind `anchor`.
    #[must_use]
    pub fn with_anchor(mut self, anchor: &str) -> Self {
        self.anchor = anchor.to_lowercase();
        self
    }

    /// Build the indexed form of a segment.
    #[must_use]
    pub fn format_segment(&self, base: &str, index: usize) -> String {
        format!("{base}{}{index}{}", self.index_prefix, self.index_suffix)
    }

    /// Split a segment into its base identifier and optional index.
    ///
    /// A segment that does not end in `prefix digits suffix` (or whose base
    /// would be empty) is a bare base identifier.
    #[must_use]
    pub fn split_segment<'a>(&self, segment: &'a str) -> (&'a str, Option<usize>) {
        let Some(rest) = segment.strip_suffix(self.index_suffix.as_str()) else {
            return (segment, None);
        };

        let digits_start = rest.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if digits_start == rest.len() {
            return (segment, None);
        }

        let (head, digits) = rest.split_at(digits_start);
        let Some(base) = head.strip_suffix(self.index_prefix.as_str()) else {
            return (segment, None);
        };
        if base.is_empty() {
            return (segment, None);
        }

        match digits.parse() {
            Ok(index) => (base, Some(index)),
            Err(_) => (segment, None),
        }
    }

    /// Base identifier of a segment.
    #[must_use]
    pub fn base_of<'a>(&self, segment: &'a str) -> &'a str {
        self.split_segment(segment).0
    }

    /// Join segments with the configured separator.
    #[must_use]
    pub fn join<'a, I>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .collect::<Vec<_>>()
            .join(self.separator.as_str())
    }
}

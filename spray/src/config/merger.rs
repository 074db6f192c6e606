//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use spray::config::{Config, ConfigMerger};
///
/// let low = Config { separator: Some("/".to_string()), ..Default::default() };
/// let high = Config { separator: Some("-".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.separator.as_deref(), Some("-"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when the source sets it, including
    /// `output_attributes`: a higher layer naming its own attribute list means
    /// exactly that list.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.input_attribute.is_some() {
            target.input_attribute.clone_from(&source.input_attribute);
        }

        if source.output_attributes.is_some() {
            target.output_attributes.clone_from(&source.output_attributes);
        }

        if source.separator.is_some() {
            target.separator.clone_from(&source.separator);
        }

        if source.force_index.is_some() {
            target.force_index = source.force_index;
        }

        if source.index_prefix.is_some() {
            target.index_prefix.clone_from(&source.index_prefix);
        }

        if source.index_suffix.is_some() {
            target.index_suffix.clone_from(&source.index_suffix);
        }

        if source.anchor.is_some() {
            target.anchor.clone_from(&source.anchor);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

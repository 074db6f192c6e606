//! Rendering of scenario reports.
//!
//! A report can be printed as tab-separated text for people and shell
//! pipelines, or serialized as JSON or YAML for tooling.

mod formatters;

use crate::config::OutputFormat;
use crate::dom::ScenarioReport;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for formatting a scenario report into a string.
pub trait ReportFormatter {
    /// Format the given report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &ScenarioReport) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

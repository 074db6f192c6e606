//! Report formatter implementations.

use crate::dom::ScenarioReport;
use crate::Result;

use super::ReportFormatter;

/// One `identifier<TAB>name` line per element; unnamed elements print the
/// identifier alone.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScenarioReport) -> Result<String> {
        let lines: Vec<String> = report
            .entries
            .iter()
            .map(|entry| match &entry.name {
                Some(name) => format!("{}\t{name}", entry.identifier),
                None => entry.identifier.clone(),
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScenarioReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML.
pub struct YamlFormatter;

impl ReportFormatter for YamlFormatter {
    fn format(&self, report: &ScenarioReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::dom::ReportEntry;

    fn create_test_report() -> ScenarioReport {
        ScenarioReport {
            entries: vec![
                ReportEntry {
                    name: Some("first".to_string()),
                    tag: "div".to_string(),
                    identifier: "body/div[0]".to_string(),
                },
                ReportEntry {
                    name: None,
                    tag: "div".to_string(),
                    identifier: "body/div[1]".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_text_formatter() {
        let output = TextFormatter.format(&create_test_report()).unwrap();
        assert_eq!(output, "body/div[0]\tfirst\nbody/div[1]");
    }

    #[test]
    fn test_text_formatter_empty() {
        let output = TextFormatter.format(&ScenarioReport::default()).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&create_test_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["entries"][0]["identifier"], "body/div[0]");
        assert_eq!(parsed["entries"][0]["name"], "first");
        assert!(parsed["entries"][1].get("name").is_none());
    }

    #[test]
    fn test_yaml_formatter_parses_back() {
        let report = create_test_report();
        let output = YamlFormatter.format(&report).unwrap();
        let parsed: ScenarioReport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.entries[0].identifier, "body/div[0]");
        assert_eq!(parsed.entries[1].name, None);
    }

    #[test]
    fn test_create_formatter_for_each_format() {
        let report = create_test_report();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            let output = format.create_formatter().format(&report).unwrap();
            assert!(output.contains("body/div[1]"));
        }
    }
}

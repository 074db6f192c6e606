//! YAML scenarios: a body subtree plus a sequence of mount and unmount steps.
//!
//! ```yaml
//! body:
//!   - tag: div
//!     children:
//!       - tag: div
//!         name: first
//!       - tag: div
//!         name: second
//!         attributes:
//!           data-spray: testDiv
//! steps:
//!   - mount: first
//!   - mount: second
//!   - unmount: first
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::IndexerOptions;
use crate::dom::document::{Document, NodeId};
use crate::error::{Error, Result};
use crate::index::Indexer;

fn default_track() -> bool {
    true
}

/// One element of a scenario body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    /// Tag name.
    pub tag: String,
    /// Name steps refer to; unique within the scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attributes set before anything is mounted.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Whether the element is mounted when the scenario has no steps.
    #[serde(default = "default_track")]
    pub track: bool,
    /// Child elements in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

/// A single step; exactly one of the fields must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Insert the named element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
    /// Remove the named element, then detach it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmount: Option<String>,
}

enum Action<'a> {
    Mount(&'a str),
    Unmount(&'a str),
}

impl Step {
    fn action(&self) -> Result<Action<'_>> {
        match (&self.mount, &self.unmount) {
            (Some(name), None) => Ok(Action::Mount(name)),
            (None, Some(name)) => Ok(Action::Unmount(name)),
            _ => Err(Error::Scenario {
                details: "each step needs exactly one of 'mount' or 'unmount'".to_string(),
            }),
        }
    }
}

/// A document to build and the mount/unmount sequence to run on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Children of the `body` element.
    #[serde(default)]
    pub body: Vec<ElementSpec>,
    /// Explicit steps; without them every tracked element is mounted, children first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

/// An element the indexer tracks at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Scenario name, when the element has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tag name.
    pub tag: String,
    /// Identifier assigned by the indexer.
    pub identifier: String,
}

/// Outcome of [`Scenario::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Tracked, attached elements in document order.
    pub entries: Vec<ReportEntry>,
}

impl ScenarioReport {
    /// The entry for a named element.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
    }

    /// The identifier of a named element.
    #[must_use]
    pub fn identifier(&self, name: &str) -> Option<&str> {
        self.get(name).map(|entry| entry.identifier.as_str())
    }
}

#[derive(Default)]
struct Built {
    names: HashMap<String, NodeId>,
    labels: HashMap<NodeId, String>,
    tracked: Vec<NodeId>,
}

impl Scenario {
    /// Parse a scenario from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Read a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read scenario file: {e}"),
        })?;
        Self::from_yaml(&contents)
    }

    /// Build the document and run every step with a fresh indexer.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate element names, steps naming unknown
    /// elements, steps that set both or neither action, or an element whose
    /// written identifier is out of date.
    ///
    /// # Examples
    ///
    /// ```
    /// use spray::dom::Scenario;
    /// use spray::IndexerOptions;
    ///
    /// let scenario = Scenario::from_yaml(
    ///     "body:\n  - tag: div\n    children:\n      - {tag: div, name: a}\n      - {tag: div, name: b}\n",
    /// )
    /// .unwrap();
    ///
    /// let report = scenario.run(&IndexerOptions::default()).unwrap();
    /// assert_eq!(report.identifier("a"), Some("body/div/div[0]"));
    /// assert_eq!(report.identifier("b"), Some("body/div/div[1]"));
    /// ```
    pub fn run(&self, options: &IndexerOptions) -> Result<ScenarioReport> {
        let mut doc = Document::new();
        let mut built = Built::default();
        let body = doc.body();
        for element in &self.body {
            Self::build(&mut doc, body, element, &mut built)?;
        }

        let mut indexer = Indexer::new(options.clone());
        match &self.steps {
            None => {
                for node in &built.tracked {
                    indexer.insert(&mut doc, *node);
                }
            }
            Some(steps) => {
                for step in steps {
                    match step.action()? {
                        Action::Mount(name) => {
                            let node = Self::named(&built, name)?;
                            if indexer.insert(&mut doc, node).is_none() {
                                log::debug!("mount of '{name}' had no effect");
                            }
                        }
                        Action::Unmount(name) => {
                            let node = Self::named(&built, name)?;
                            indexer.remove(&mut doc, node);
                            doc.detach(node);
                        }
                    }
                }
            }
        }

        Self::report(&doc, &indexer, &built.labels)
    }

    /// Reads back the identifier every tracked, attached element carries.
    ///
    /// The written output attribute is reported; it must agree with the
    /// indexer's own view of the element.
    fn report(
        doc: &Document,
        indexer: &Indexer<Document>,
        labels: &HashMap<NodeId, String>,
    ) -> Result<ScenarioReport> {
        let written = indexer.options().output_attributes.first();
        let mut entries = Vec::new();

        for node in doc.descendants(doc.root()) {
            if node == doc.body() {
                continue;
            }
            let Some(expected) = indexer.identifier_of(node) else {
                continue;
            };
            let identifier = match written {
                Some(attribute) => doc.attribute(node, attribute).unwrap_or_default(),
                None => expected.as_str(),
            };
            if identifier != expected {
                return Err(Error::Scenario {
                    details: format!(
                        "<{}> carries '{identifier}' but is indexed as '{expected}'",
                        doc.tag(node)
                    ),
                });
            }

            entries.push(ReportEntry {
                name: labels.get(&node).cloned(),
                tag: doc.tag(node).to_string(),
                identifier: identifier.to_string(),
            });
        }

        Ok(ScenarioReport { entries })
    }

    fn named(built: &Built, name: &str) -> Result<NodeId> {
        built
            .names
            .get(name)
            .copied()
            .ok_or_else(|| Error::Scenario {
                details: format!("step refers to unknown element '{name}'"),
            })
    }

    /// Creates `element` below `parent`; tracked elements are recorded children first.
    fn build(
        doc: &mut Document,
        parent: NodeId,
        element: &ElementSpec,
        built: &mut Built,
    ) -> Result<NodeId> {
        if element.tag.trim().is_empty() {
            return Err(Error::Scenario {
                details: "element tag cannot be empty".to_string(),
            });
        }

        let node = doc.create_element(&element.tag);
        for (name, value) in &element.attributes {
            doc.set_attribute(node, name, value);
        }
        doc.append_child(parent, node);

        if let Some(name) = &element.name {
            if built.names.insert(name.clone(), node).is_some() {
                return Err(Error::Scenario {
                    details: format!("duplicate element name '{name}'"),
                });
            }
            built.labels.insert(node, name.clone());
        }

        for child in &element.children {
            Self::build(doc, node, child, built)?;
        }
        if element.track {
            built.tracked.push(node);
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r"
body:
  - tag: div
    name: outer
    children:
      - tag: div
        name: first
      - tag: div
        name: second
";

    #[test]
    fn test_default_mounts_everything_children_first() {
        let scenario = Scenario::from_yaml(NESTED).unwrap();
        let report = scenario.run(&IndexerOptions::default()).unwrap();

        let names: Vec<_> = report.entries.iter().map(|e| e.name.as_deref()).collect();
        assert_eq!(names, vec![Some("outer"), Some("first"), Some("second")]);
        assert_eq!(report.identifier("outer"), Some("body/div"));
        assert_eq!(report.identifier("first"), Some("body/div/div[0]"));
        assert_eq!(report.identifier("second"), Some("body/div/div[1]"));
    }

    #[test]
    fn test_untracked_elements_are_not_reported() {
        let scenario = Scenario::from_yaml(
            "body:\n  - tag: main\n    track: false\n    children:\n      - {tag: p, name: text}\n",
        )
        .unwrap();
        let report = scenario.run(&IndexerOptions::default()).unwrap();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.identifier("text"), Some("body/main/p"));
    }

    #[test]
    fn test_steps_drive_mounting() {
        let mut scenario = Scenario::from_yaml(NESTED).unwrap();
        scenario.steps = Some(vec![
            Step { mount: Some("first".to_string()), unmount: None },
            Step { mount: Some("second".to_string()), unmount: None },
            Step { mount: None, unmount: Some("first".to_string()) },
        ]);

        let report = scenario.run(&IndexerOptions::default()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.identifier("second"), Some("body/div/div"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let scenario = Scenario::from_yaml(
            "body:\n  - {tag: div, name: same}\n  - {tag: span, name: same}\n",
        )
        .unwrap();
        let err = scenario.run(&IndexerOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Scenario { .. }));
    }

    #[test]
    fn test_unknown_step_target_rejected() {
        let scenario =
            Scenario::from_yaml("body:\n  - {tag: div, name: a}\nsteps:\n  - mount: b\n").unwrap();
        let err = scenario.run(&IndexerOptions::default()).unwrap_err();
        assert!(err.to_string().contains("unknown element 'b'"));
    }

    #[test]
    fn test_ambiguous_step_rejected() {
        let scenario = Scenario::from_yaml(
            "body:\n  - {tag: div, name: a}\nsteps:\n  - {mount: a, unmount: a}\n",
        )
        .unwrap();
        assert!(scenario.run(&IndexerOptions::default()).is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(Scenario::from_yaml("body:\n  - {tag: div, colour: red}\n").is_err());
        assert!(Scenario::from_yaml("bodies: []\n").is_err());
    }

    #[test]
    fn test_report_reads_written_attribute() {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.create_element("div");
        doc.append_child(body, div);
        let mut indexer = Indexer::new(IndexerOptions::default());
        indexer.insert(&mut doc, div);
        let labels = HashMap::from([(div, "panel".to_string())]);

        let report = Scenario::report(&doc, &indexer, &labels).unwrap();
        assert_eq!(report.identifier("panel"), Some("body/div"));

        doc.set_attribute(div, "data-id", "body/div[3]");
        let err = Scenario::report(&doc, &indexer, &labels).unwrap_err();
        assert!(err.to_string().contains("body/div[3]"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.yaml")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }
}

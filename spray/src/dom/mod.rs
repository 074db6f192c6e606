//! An in-memory host tree and scenario runner.
//!
//! [`Document`] is a small arena DOM implementing [`HostTree`](crate::HostTree),
//! used by the CLI, the tests and anyone who wants to index a tree without a
//! browser. [`Scenario`] describes a document and a mount/unmount sequence in
//! YAML and runs it through a fresh [`Indexer`](crate::Indexer).

mod document;
mod scenario;

pub use document::{Document, NodeId};
pub use scenario::{ElementSpec, ReportEntry, Scenario, ScenarioReport, Step};

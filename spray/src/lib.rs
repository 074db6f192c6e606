#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # spray
//!
//! A library for giving every node of a live tree a stable, hierarchical
//! path identifier.
//!
//! Identifiers are built from a node's ancestry below an anchor (`body` by
//! default) and its position among same-kind siblings, e.g. `body/div[1]/p`.
//! The [`Indexer`] keeps them correct as tracked nodes are inserted and
//! removed, renumbering siblings and rewriting descendants when needed.
//!
//! ## Core Types
//!
//! - [`HostTree`]: the capability a tree must offer to be indexed
//! - [`Indexer`] and [`ShadowTree`]: the indexing engine
//! - [`IndexerOptions`], [`Config`] and [`ConfigBuilder`]: configuration
//! - [`Document`] and [`Scenario`]: an in-memory tree and a YAML scenario runner
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use spray::{Document, Indexer, IndexerOptions};
//!
//! let mut doc = Document::new();
//! let outer = doc.create_element("div");
//! let inner = doc.create_element("div");
//! doc.append_child(doc.body(), outer);
//! doc.append_child(outer, inner);
//!
//! let mut indexer = Indexer::new(IndexerOptions::default());
//! let id = indexer.insert(&mut doc, inner);
//! assert_eq!(id.as_deref(), Some("body/div/div"));
//! assert_eq!(doc.attribute(inner, "data-id"), Some("body/div/div"));
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod host;
pub mod index;
pub mod logging;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, IndexerOptions, OutputFormat};
pub use dom::{Document, NodeId, Scenario, ScenarioReport};
pub use error::{Error, Result};
pub use host::HostTree;
pub use index::{Indexer, ShadowId, ShadowTree};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::ReportFormatter;

//! Common test utilities for integration tests.
//!
//! This module provides helper functions for building small documents and
//! indexers.

use spray::{Document, IndexerOptions, NodeId};

/// Creates an element and appends it to `parent`.
#[allow(dead_code)]
pub fn attach(doc: &mut Document, parent: NodeId, tag: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.append_child(parent, node);
    node
}

/// Creates an element with an explicit `data-spray` identifier and appends it
/// to `parent`, the way `withSpray("name")` components render.
#[allow(dead_code)]
pub fn attach_named(doc: &mut Document, parent: NodeId, tag: &str, name: &str) -> NodeId {
    let node = attach(doc, parent, tag);
    doc.set_attribute(node, "data-spray", name);
    node
}

/// Options with a dash separator, `:N` indices on every segment and custom
/// attribute names.
#[allow(dead_code)]
pub fn dashed_options() -> IndexerOptions {
    IndexerOptions::default()
        .with_separator("-")
        .with_index_affixes(":", "")
        .with_force_index(true)
        .with_input_attribute("data-input")
        .with_output_attributes(["data-eid"])
}

/// The default output attribute of a node.
#[allow(dead_code)]
pub fn id_of(doc: &Document, node: NodeId) -> Option<String> {
    doc.attribute(node, "data-id").map(str::to_string)
}

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

//! Path derivation from live host ancestry.

use crate::config::IndexerOptions;
use crate::host::HostTree;

/// A node's position below its anchor, as segment keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPath<N> {
    /// The nearest ancestor (or the node itself) whose kind is the anchor.
    pub anchor: N,
    /// Segments from just below the anchor down to the node, inclusive.
    pub segments: Vec<String>,
}

/// The identifier a node declares for itself: its input attribute when
/// present and non-empty, otherwise its lower-cased kind.
pub fn base_identifier<H>(host: &H, options: &IndexerOptions, node: H::Node) -> String
where
    H: HostTree + ?Sized,
{
    match host.attribute(node, &options.input_attribute) {
        Some(value) if !value.is_empty() => value.into_owned(),
        _ => host.kind(node).to_lowercase(),
    }
}

/// Whether `node` is of the anchor kind.
pub fn is_anchor<H>(host: &H, options: &IndexerOptions, node: H::Node) -> bool
where
    H: HostTree + ?Sized,
{
    host.kind(node).to_lowercase() == options.anchor
}

/// Children of `parent` sharing the base identifier `base`, in host order.
pub fn same_kind_children<H>(
    host: &H,
    options: &IndexerOptions,
    parent: H::Node,
    base: &str,
) -> Vec<H::Node>
where
    H: HostTree + ?Sized,
{
    host.children(parent)
        .into_iter()
        .filter(|child| base_identifier(host, options, *child) == base)
        .collect()
}

/// The segment `node` occupies below `parent`.
fn segment<H>(host: &H, options: &IndexerOptions, node: H::Node, parent: H::Node) -> String
where
    H: HostTree + ?Sized,
{
    let base = base_identifier(host, options, node);
    let siblings = same_kind_children(host, options, parent, &base);

    if options.force_index || siblings.len() > 1 {
        // A node missing from its parent's children is treated as the first.
        let position = siblings
            .iter()
            .position(|sibling| *sibling == node)
            .unwrap_or(0);
        options.format_segment(&base, position)
    } else {
        base
    }
}

/// Walks from `node` up to the nearest anchor.
///
/// Returns `None` when a parentless node is reached first. An anchor node
/// derives the empty path.
///
/// # Examples
///
/// ```
/// use spray::dom::Document;
/// use spray::index::derive_path;
/// use spray::IndexerOptions;
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let outer = doc.create_element("div");
/// let inner = doc.create_element("div");
/// doc.append_child(body, outer);
/// doc.append_child(outer, inner);
///
/// let path = derive_path(&doc, &IndexerOptions::default(), inner).unwrap();
/// assert_eq!(path.anchor, body);
/// assert_eq!(path.segments, vec!["div", "div"]);
/// ```
pub fn derive_path<H>(
    host: &H,
    options: &IndexerOptions,
    node: H::Node,
) -> Option<DerivedPath<H::Node>>
where
    H: HostTree + ?Sized,
{
    let mut segments = Vec::new();
    let mut current = node;

    while !is_anchor(host, options, current) {
        let parent = host.parent(current)?;
        segments.push(segment(host, options, current, parent));
        current = parent;
    }

    segments.reverse();
    Some(DerivedPath {
        anchor: current,
        segments,
    })
}

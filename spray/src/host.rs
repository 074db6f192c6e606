//! The host-tree capability.
//!
//! The indexer never owns the tree it labels. Whoever renders the tree (a DOM
//! binding, a widget toolkit, the in-memory [`Document`](crate::dom::Document))
//! implements [`HostTree`] and hands the indexer opaque node handles.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Read/write access to a live tree of elements.
///
/// Handles are identity tokens: two handles compare equal exactly when they
/// denote the same host node. The indexer stores them as non-owning
/// back-references and never dereferences them except through this trait.
pub trait HostTree {
    /// Opaque, cheaply copyable node handle.
    type Node: Copy + Eq + Hash + Debug;

    /// The node's kind, e.g. an element tag name. Case is normalized by the caller.
    fn kind(&self, node: Self::Node) -> Cow<'_, str>;

    /// Value of the named attribute, if present.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<Cow<'_, str>>;

    /// Sets (or overwrites) the named attribute.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// The node's parent, or `None` for a detached node or the tree root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The node's children in native order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;
}

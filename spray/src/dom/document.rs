//! Arena-backed element tree.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::host::HostTree;

/// Compact element handle (index into the document arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
}

/// A mutable element tree rooted at `html > body`.
///
/// Elements are created detached and attached with [`Document::append_child`]
/// or [`Document::insert_before`]. Handles stay valid for the lifetime of the
/// document; detaching an element keeps it (and its subtree) around so it can
/// be attached again.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    root: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding `html > body`.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self {
            elements: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
        };
        let root = document.create_element("html");
        let body = document.create_element("body");
        document.append_child(root, body);
        document.root = root;
        document.body = body;
        document
    }

    /// The `html` element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of elements ever created, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: a document holds at least `html` and `body`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element(&self, id: NodeId) -> &Element {
        &self.elements[id.0 as usize]
    }

    fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.elements[id.0 as usize]
    }

    /// Creates a detached element.
    #[allow(clippy::cast_possible_truncation)]
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.elements.len() as u32);
        self.elements.push(Element {
            tag: tag.to_string(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
        });
        id
    }

    /// The element's tag, as created.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        &self.element(id).tag
    }

    /// The element's parent.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.element(id).parent
    }

    /// The element's children in order.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.element(id).children
    }

    /// Value of an attribute.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).attributes.get(name).map(String::as_str)
    }

    /// All attributes, ordered by name.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &BTreeMap<String, String> {
        &self.element(id).attributes
    }

    /// Sets or overwrites an attribute.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.element_mut(id)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    #[must_use]
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent_of(node);
        }
        false
    }

    /// Whether `id` is attached below the `html` element.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor(self.root, id)
    }

    /// Appends `child` as the last child of `parent`, moving it if attached.
    ///
    /// Attaching an element below itself is refused.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.is_inclusive_ancestor(child, parent) {
            log::warn!("refusing to attach {child:?} below itself");
            return;
        }
        self.detach(child);
        self.element_mut(parent).children.push(child);
        self.element_mut(child).parent = Some(parent);
    }

    /// Inserts `child` into `parent` just before `reference`.
    ///
    /// Appends when `reference` is not a child of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if self.is_inclusive_ancestor(child, parent) {
            log::warn!("refusing to attach {child:?} below itself");
            return;
        }
        self.detach(child);

        let children = &mut self.element_mut(parent).children;
        match children.iter().position(|c| *c == reference) {
            Some(position) => children.insert(position, child),
            None => children.push(child),
        }
        self.element_mut(child).parent = Some(parent);
    }

    /// Detaches `id` from its parent. Its own subtree stays intact.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.element_mut(id).parent.take() {
            self.element_mut(parent).children.retain(|c| *c != id);
        }
    }

    /// `id` and all of its descendants in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children_of(current).iter().rev().copied());
        }
        order
    }
}

impl HostTree for Document {
    type Node = NodeId;

    fn kind(&self, node: NodeId) -> Cow<'_, str> {
        Cow::Borrowed(self.tag(node))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<Cow<'_, str>> {
        Document::attribute(self, node, name).map(Cow::Borrowed)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        Document::set_attribute(self, node, name, value);
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_of(node)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.children_of(node).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_shape() {
        let doc = Document::new();
        assert_eq!(doc.tag(doc.root()), "html");
        assert_eq!(doc.tag(doc.body()), "body");
        assert_eq!(doc.parent_of(doc.body()), Some(doc.root()));
        assert_eq!(doc.children_of(doc.root()), &[doc.body()]);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_append_and_insert_before() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        let c = doc.create_element("c");
        doc.append_child(body, a);
        doc.append_child(body, c);
        doc.insert_before(body, b, c);

        assert_eq!(doc.children_of(body), &[a, b, c]);
        assert_eq!(doc.parent_of(b), Some(body));
    }

    #[test]
    fn test_insert_before_unknown_reference_appends() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a");
        let stray = doc.create_element("stray");
        doc.insert_before(body, a, stray);
        assert_eq!(doc.children_of(body), &[a]);
    }

    #[test]
    fn test_append_moves_attached_element() {
        let mut doc = Document::new();
        let body = doc.body();
        let first = doc.create_element("div");
        let second = doc.create_element("div");
        let item = doc.create_element("p");
        doc.append_child(body, first);
        doc.append_child(body, second);
        doc.append_child(first, item);
        doc.append_child(second, item);

        assert!(doc.children_of(first).is_empty());
        assert_eq!(doc.children_of(second), &[item]);
    }

    #[test]
    fn test_detach_keeps_subtree() {
        let mut doc = Document::new();
        let body = doc.body();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_child(body, outer);
        doc.append_child(outer, inner);

        doc.detach(outer);
        assert!(!doc.is_attached(outer));
        assert!(!doc.is_attached(inner));
        assert_eq!(doc.parent_of(inner), Some(outer));
        assert!(doc.children_of(body).is_empty());
    }

    #[test]
    fn test_refuses_cycles() {
        let mut doc = Document::new();
        let body = doc.body();
        let outer = doc.create_element("div");
        doc.append_child(body, outer);

        doc.append_child(outer, body);
        assert_eq!(doc.parent_of(body), Some(doc.root()));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        let c = doc.create_element("c");
        doc.append_child(body, a);
        doc.append_child(a, b);
        doc.append_child(body, c);

        assert_eq!(doc.descendants(body), vec![body, a, b, c]);
    }

    #[test]
    fn test_host_tree_view() {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.create_element("DIV");
        doc.append_child(body, div);
        HostTree::set_attribute(&mut doc, div, "data-id", "body/div");

        assert_eq!(HostTree::kind(&doc, div), "DIV");
        assert_eq!(
            HostTree::attribute(&doc, div, "data-id").as_deref(),
            Some("body/div")
        );
        assert_eq!(HostTree::parent(&doc, div), Some(body));
        assert_eq!(HostTree::children(&doc, body), vec![div]);
    }
}

//! Insertion, removal and sibling renumbering over a [`ShadowTree`].

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::config::IndexerOptions;
use crate::host::HostTree;
use crate::index::derive::{base_identifier, derive_path, same_kind_children};
use crate::index::shadow::{ShadowId, ShadowTree};

/// Keeps path identifiers of tracked host nodes up to date.
///
/// The indexer mirrors tracked nodes in a [`ShadowTree`] keyed by path
/// segments. Every insert or remove renumbers the affected sibling group and
/// rewrites the output attributes of any node whose path changed.
///
/// # Examples
///
/// ```
/// use spray::dom::Document;
/// use spray::{Indexer, IndexerOptions};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let first = doc.create_element("div");
/// doc.append_child(body, first);
///
/// let mut indexer = Indexer::new(IndexerOptions::default());
/// assert_eq!(indexer.insert(&mut doc, first).as_deref(), Some("body/div"));
///
/// let second = doc.create_element("div");
/// doc.append_child(body, second);
/// indexer.insert(&mut doc, second);
///
/// assert_eq!(doc.attribute(first, "data-id"), Some("body/div[0]"));
/// assert_eq!(doc.attribute(second, "data-id"), Some("body/div[1]"));
/// ```
pub struct Indexer<H: HostTree> {
    options: IndexerOptions,
    tree: ShadowTree<H::Node>,
}

impl<H: HostTree> fmt::Debug for Indexer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexer")
            .field("options", &self.options)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<H: HostTree> Default for Indexer<H> {
    fn default() -> Self {
        Self::new(IndexerOptions::default())
    }
}

impl<H: HostTree> Indexer<H> {
    /// Creates an indexer with an empty shadow tree.
    #[must_use]
    pub fn new(options: IndexerOptions) -> Self {
        Self {
            options,
            tree: ShadowTree::new(),
        }
    }

    /// The options this indexer was built with.
    #[must_use]
    pub fn options(&self) -> &IndexerOptions {
        &self.options
    }

    /// The shadow tree mirroring tracked nodes.
    #[must_use]
    pub fn tree(&self) -> &ShadowTree<H::Node> {
        &self.tree
    }

    /// Starts tracking `node` and writes its identifier to the output attributes.
    ///
    /// Returns the identifier, or `None` when `node` is absent or has no
    /// anchor among its ancestors.
    pub fn insert(&mut self, host: &mut H, node: impl Into<Option<H::Node>>) -> Option<String> {
        let Some(node) = node.into() else {
            log::debug!("insert skipped: no node");
            return None;
        };
        let Some(path) = derive_path(host, &self.options, node) else {
            log::debug!("insert skipped: {node:?} is not under a {} node", self.options.anchor);
            return None;
        };

        let mut shadow = self.ensure_anchor(path.anchor);
        let mut cursor = path.anchor;

        for segment in &path.segments {
            if let Some(next) = self.resolve_child(host, cursor, segment) {
                // Another live node still holds this key; let it move first.
                let holder = self
                    .tree
                    .child(shadow, segment)
                    .and_then(|id| self.represented(&*host, id, cursor));
                if holder.is_some_and(|holder| holder != next) {
                    self.refresh_group(host, shadow, cursor, None);
                }
                cursor = next;
            }
            shadow = self.tree.ensure_child(shadow, segment);
        }

        if let Some(previous) = self.tree.bind(shadow, node) {
            if previous != node {
                log::debug!("{previous:?} replaced by {node:?}");
            }
        }

        let identifier = self.identifier(shadow);
        self.stamp(host, node, &identifier);
        log::debug!("inserted {node:?} as {identifier}");

        if cursor != path.anchor {
            if let Some(parent) = host.parent(cursor) {
                self.refresh_from(host, parent, None);
            }
        }

        Some(identifier)
    }

    /// Stops tracking `node`, prunes emptied segments and renumbers its siblings.
    ///
    /// `node` is expected to still be attached; it is left out of the
    /// renumbering so the remaining siblings close the gap at once. Returns
    /// `false` when there was nothing to remove.
    pub fn remove(&mut self, host: &mut H, node: impl Into<Option<H::Node>>) -> bool {
        let Some(node) = node.into() else {
            log::debug!("remove skipped: no node");
            return false;
        };
        let Some(path) = derive_path(host, &self.options, node) else {
            log::debug!("remove skipped: {node:?} is not under a {} node", self.options.anchor);
            return false;
        };
        if path.segments.is_empty() {
            log::debug!("remove skipped: {node:?} is the anchor");
            return false;
        }
        let Some(anchor) = self.tree.child(self.tree.root(), &self.options.anchor) else {
            log::debug!("remove skipped: nothing is tracked");
            return false;
        };

        let mut trail = vec![self.tree.root()];
        let mut shadow = anchor;
        let mut cursor = path.anchor;

        for segment in &path.segments {
            let Some(next_shadow) = self.tree.child(shadow, segment) else {
                log::debug!("remove skipped: {node:?} is not tracked");
                return false;
            };
            if let Some(next) = self.resolve_child(host, cursor, segment) {
                cursor = next;
            }
            trail.push(shadow);
            shadow = next_shadow;
        }

        if self.tree.bound(shadow) != Some(node) {
            log::debug!("remove skipped: {node:?} is not bound at its path");
            return false;
        }

        self.tree.unbind(shadow);
        self.prune(shadow, &trail);
        log::debug!("removed {node:?}");

        if cursor != path.anchor {
            if let Some(parent) = host.parent(cursor) {
                self.refresh_from(host, parent, Some(node));
            }
        }

        true
    }

    /// Renumbers the tracked children of `parent` against its live children.
    ///
    /// Returns `false` when `parent` has no shadow counterpart. Running it
    /// again without host changes leaves every identifier as it was.
    pub fn recompute(&mut self, host: &mut H, parent: H::Node) -> bool {
        self.refresh_from(host, parent, None)
    }

    /// The current identifier of a tracked node.
    #[must_use]
    pub fn identifier_of(&self, node: H::Node) -> Option<String> {
        self.tree.find_bound(node).map(|id| self.identifier(id))
    }

    /// Whether `node` is currently tracked.
    #[must_use]
    pub fn is_tracked(&self, node: H::Node) -> bool {
        self.tree.find_bound(node).is_some()
    }

    fn ensure_anchor(&mut self, anchor: H::Node) -> ShadowId {
        let root = self.tree.root();
        let id = self.tree.ensure_child(root, &self.options.anchor);
        if self.tree.bound(id) != Some(anchor) {
            self.tree.bind(id, anchor);
        }
        id
    }

    fn identifier(&self, id: ShadowId) -> String {
        let path = self.tree.path_of(id);
        self.options.join(path.iter().map(String::as_str))
    }

    fn stamp(&self, host: &mut H, node: H::Node, identifier: &str) {
        for attribute in &self.options.output_attributes {
            host.set_attribute(node, attribute, identifier);
        }
    }

    /// The live child of `cursor` that `segment` names, if it is unambiguous.
    fn resolve_child(&self, host: &H, cursor: H::Node, segment: &str) -> Option<H::Node> {
        let (base, index) = self.options.split_segment(segment);
        let matching = same_kind_children(host, &self.options, cursor, base);
        match index {
            Some(index) => matching.get(index).copied(),
            None if matching.len() == 1 => matching.first().copied(),
            None => None,
        }
    }

    /// Shadow node of a live node, found through its re-derived path.
    fn locate(&self, host: &H, node: H::Node) -> Option<ShadowId> {
        let path = derive_path(host, &self.options, node)?;
        let anchor = self.tree.child(self.tree.root(), &self.options.anchor)?;
        self.tree.resolve(anchor, &path.segments)
    }

    fn prune(&mut self, leaf: ShadowId, trail: &[ShadowId]) {
        let anchor = self.tree.child(self.tree.root(), &self.options.anchor);
        let mut current = leaf;

        for parent in trail.iter().rev() {
            let vacant = if Some(current) == anchor {
                !self.tree.has_children(current)
            } else {
                self.tree.is_vacant(current)
            };
            if !vacant {
                break;
            }

            let key = self.tree.key(current).to_string();
            self.tree.detach(*parent, &key);
            log::debug!("pruned segment {key}");
            current = *parent;
        }
    }

    fn refresh_from(&mut self, host: &mut H, parent: H::Node, exclude: Option<H::Node>) -> bool {
        let Some(shadow) = self.locate(host, parent) else {
            log::debug!("recompute skipped: {parent:?} is not tracked");
            return false;
        };
        self.refresh_group(host, shadow, parent, exclude);
        true
    }

    /// The live child of `live_parent` a shadow entry stands for.
    ///
    /// A bound entry stands for its own host node. An unbound entry stands for
    /// the child of `live_parent` that holds one of its bound descendants.
    fn represented(&self, host: &H, entry: ShadowId, live_parent: H::Node) -> Option<H::Node> {
        if let Some(node) = self.tree.bound(entry) {
            return (host.parent(node) == Some(live_parent)).then_some(node);
        }
        self.tree
            .subtree(entry)
            .into_iter()
            .filter_map(|id| self.tree.bound(id))
            .find_map(|node| child_towards(host, live_parent, node))
    }

    /// Moves every child of `shadow_parent` to the key its live position
    /// calls for, then rewrites identifiers below each moved entry.
    fn refresh_group(
        &mut self,
        host: &mut H,
        shadow_parent: ShadowId,
        live_parent: H::Node,
        exclude: Option<H::Node>,
    ) -> usize {
        let mut bases = BTreeSet::new();
        let mut entries: HashMap<H::Node, ShadowId> = HashMap::new();
        for (key, child) in self.tree.children(shadow_parent) {
            bases.insert(self.options.base_of(key).to_string());
            if let Some(sibling) = self.represented(&*host, child, live_parent) {
                entries.entry(sibling).or_insert(child);
            }
        }

        let live: Vec<(H::Node, String)> = host
            .children(live_parent)
            .into_iter()
            .filter(|child| Some(*child) != exclude)
            .map(|child| (child, base_identifier(&*host, &self.options, child)))
            .collect();

        let mut moves = Vec::new();
        for base in &bases {
            let siblings: Vec<H::Node> = live
                .iter()
                .filter(|(_, sibling_base)| sibling_base == base)
                .map(|(sibling, _)| *sibling)
                .collect();
            if siblings.is_empty() {
                continue;
            }

            let indexed = self.options.force_index || siblings.len() > 1;
            for (position, sibling) in siblings.iter().enumerate() {
                let Some(&entry) = entries.get(sibling) else {
                    continue;
                };

                let key = if indexed {
                    self.options.format_segment(base, position)
                } else {
                    base.clone()
                };
                if self.tree.key(entry) != key {
                    log::debug!("relocating {} to {key}", self.tree.key(entry));
                    moves.push((entry, key));
                }
            }
        }

        if moves.is_empty() {
            return 0;
        }

        for key in self.tree.relocate(shadow_parent, &moves) {
            log::warn!("dropped stale entry {key}: no live sibling stands behind it");
        }
        for (entry, _) in &moves {
            self.restamp(host, *entry);
        }
        moves.len()
    }

    fn restamp(&self, host: &mut H, entry: ShadowId) {
        for id in self.tree.subtree(entry) {
            if let Some(node) = self.tree.bound(id) {
                let identifier = self.identifier(id);
                self.stamp(host, node, &identifier);
            }
        }
    }
}

/// The child of `ancestor` on the host path down to `node`.
fn child_towards<H: HostTree>(host: &H, ancestor: H::Node, node: H::Node) -> Option<H::Node> {
    let mut current = node;
    loop {
        let parent = host.parent(current)?;
        if parent == ancestor {
            return Some(current);
        }
        current = parent;
    }
}

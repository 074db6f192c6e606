//! The shadow tree: the indexer's private mirror of the tracked subset of the
//! host tree.
//!
//! Nodes live in an arena of slots addressed by [`ShadowId`]. Each node keeps
//! its key and a parent back-reference so that its root-to-node path is
//! recovered in O(depth), and bound host handles are indexed in reverse so a
//! live host node finds its shadow entry in O(1).

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Handle to a node of a [`ShadowTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShadowId(usize);

#[derive(Debug)]
struct ShadowNode<N> {
    key: String,
    parent: Option<ShadowId>,
    children: BTreeMap<String, ShadowId>,
    bound: Option<N>,
}

impl<N> ShadowNode<N> {
    fn new(key: String, parent: Option<ShadowId>) -> Self {
        Self {
            key,
            parent,
            children: BTreeMap::new(),
            bound: None,
        }
    }
}

/// Arena-backed tree of segment keys with optional host bindings.
///
/// # Examples
///
/// ```
/// use spray::index::ShadowTree;
///
/// let mut tree: ShadowTree<u32> = ShadowTree::new();
/// let body = tree.ensure_child(tree.root(), "body");
/// let div = tree.ensure_child(body, "div");
/// tree.bind(div, 7);
///
/// assert_eq!(tree.path_of(div), vec!["body", "div"]);
/// assert_eq!(tree.find_bound(7), Some(div));
/// ```
#[derive(Debug)]
pub struct ShadowTree<N> {
    slots: Vec<Option<ShadowNode<N>>>,
    free: Vec<usize>,
    root: ShadowId,
    bindings: HashMap<N, ShadowId>,
}

impl<N: Copy + Eq + Hash> Default for ShadowTree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Eq + Hash> ShadowTree<N> {
    /// Creates a tree holding only the unbound root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Some(ShadowNode::new(String::new(), None))],
            free: Vec::new(),
            root: ShadowId(0),
            bindings: HashMap::new(),
        }
    }

    /// The sentinel root.
    #[must_use]
    pub fn root(&self) -> ShadowId {
        self.root
    }

    /// Number of live nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// True when only the root remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: ShadowId) -> bool {
        self.slots.get(id.0).is_some_and(Option::is_some)
    }

    fn node(&self, id: ShadowId) -> &ShadowNode<N> {
        self.slots[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("stale shadow id {id:?}"))
    }

    fn node_mut(&mut self, id: ShadowId) -> &mut ShadowNode<N> {
        self.slots[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("stale shadow id {id:?}"))
    }

    /// The key under which `id` is stored in its parent (empty for the root).
    #[must_use]
    pub fn key(&self, id: ShadowId) -> &str {
        &self.node(id).key
    }

    /// The parent of `id`, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: ShadowId) -> Option<ShadowId> {
        self.node(id).parent
    }

    /// The child of `id` stored under `key`.
    #[must_use]
    pub fn child(&self, id: ShadowId, key: &str) -> Option<ShadowId> {
        self.node(id).children.get(key).copied()
    }

    /// Children of `id` with their keys, in key order.
    pub fn children(&self, id: ShadowId) -> impl Iterator<Item = (&str, ShadowId)> + '_ {
        self.node(id)
            .children
            .iter()
            .map(|(key, child)| (key.as_str(), *child))
    }

    /// Whether `id` has any children.
    #[must_use]
    pub fn has_children(&self, id: ShadowId) -> bool {
        !self.node(id).children.is_empty()
    }

    /// The child of `id` under `key`, created unbound if missing.
    pub fn ensure_child(&mut self, id: ShadowId, key: &str) -> ShadowId {
        if let Some(existing) = self.child(id, key) {
            return existing;
        }

        let child = self.allocate(ShadowNode::new(key.to_string(), Some(id)));
        self.node_mut(id).children.insert(key.to_string(), child);
        child
    }

    fn allocate(&mut self, node: ShadowNode<N>) -> ShadowId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                ShadowId(slot)
            }
            None => {
                self.slots.push(Some(node));
                ShadowId(self.slots.len() - 1)
            }
        }
    }

    /// The host node bound to `id`.
    #[must_use]
    pub fn bound(&self, id: ShadowId) -> Option<N> {
        self.node(id).bound
    }

    /// Binds `host` to `id`, returning the previously bound host.
    ///
    /// A host is bound to at most one node; binding it elsewhere moves it.
    pub fn bind(&mut self, id: ShadowId, host: N) -> Option<N> {
        if let Some(elsewhere) = self.bindings.get(&host).copied() {
            if elsewhere != id {
                self.node_mut(elsewhere).bound = None;
            }
        }

        let previous = self.node_mut(id).bound.replace(host);
        if let Some(previous) = previous {
            if previous != host {
                self.bindings.remove(&previous);
            }
        }
        self.bindings.insert(host, id);
        previous
    }

    /// Clears the binding of `id`, returning the host it held.
    pub fn unbind(&mut self, id: ShadowId) -> Option<N> {
        let previous = self.node_mut(id).bound.take();
        if let Some(host) = previous {
            if self.bindings.get(&host) == Some(&id) {
                self.bindings.remove(&host);
            }
        }
        previous
    }

    /// The node `host` is bound to.
    #[must_use]
    pub fn find_bound(&self, host: N) -> Option<ShadowId> {
        self.bindings.get(&host).copied()
    }

    /// True when `id` has neither children nor a bound host.
    #[must_use]
    pub fn is_vacant(&self, id: ShadowId) -> bool {
        let node = self.node(id);
        node.children.is_empty() && node.bound.is_none()
    }

    /// Removes the child of `parent` stored under `key` together with its
    /// whole subtree.
    pub fn detach(&mut self, parent: ShadowId, key: &str) -> bool {
        let Some(child) = self.node_mut(parent).children.remove(key) else {
            return false;
        };

        let mut stack = vec![child];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.slots[id.0].take() {
                if let Some(host) = node.bound {
                    if self.bindings.get(&host) == Some(&id) {
                        self.bindings.remove(&host);
                    }
                }
                stack.extend(node.children.into_values());
                self.free.push(id.0);
            }
        }
        true
    }

    /// Moves children of `parent` to new keys in one step.
    ///
    /// All moving entries leave their old keys before any takes its new key,
    /// so entries may trade keys freely. A new key still held by an entry that
    /// is not moving evicts that entry and its subtree; the evicted keys are
    /// returned.
    pub fn relocate(&mut self, parent: ShadowId, moves: &[(ShadowId, String)]) -> Vec<String> {
        for (id, _) in moves {
            let old_key = self.node(*id).key.clone();
            self.node_mut(parent).children.remove(&old_key);
        }

        let mut evicted = Vec::new();
        for (id, new_key) in moves {
            if self.child(parent, new_key).is_some() {
                self.detach(parent, new_key);
                evicted.push(new_key.clone());
            }
            self.node_mut(*id).key.clone_from(new_key);
            self.node_mut(parent).children.insert(new_key.clone(), *id);
        }
        evicted
    }

    /// Keys from the root down to `id`, root excluded.
    #[must_use]
    pub fn path_of(&self, id: ShadowId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(self.key(current).to_string());
            current = parent;
        }
        path.reverse();
        path
    }

    /// Follows `keys` down from `from`.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, from: ShadowId, keys: &[S]) -> Option<ShadowId> {
        keys.iter()
            .try_fold(from, |id, key| self.child(id, key.as_ref()))
    }

    /// `id` and all of its descendants in pre-order.
    #[must_use]
    pub fn subtree(&self, id: ShadowId) -> Vec<ShadowId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            // Reverse so that children come out in key order.
            stack.extend(self.node(current).children.values().rev().copied());
        }
        order
    }

    /// Every node path in pre-order, root excluded.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<String>> {
        self.subtree(self.root)
            .into_iter()
            .skip(1)
            .map(|id| self.path_of(id))
            .collect()
    }
}

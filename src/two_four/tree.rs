use super::arena::Arena;
use super::node::{Node, NodeId};
use super::*;
use std::fmt;

/// An order-4 balanced search tree: every internal node holds 1 to 3 keys and all external
/// nodes sit at the same depth.
/// Keys that compare as equal are stored once; inserting an equal key replaces the stored one
#[derive(Clone)]
pub struct TwoFourTree<K> {
    pub(super) arena: Arena<K>,
    pub(super) root: NodeId,
    len: usize,
}

impl<K: Ord> TwoFourTree<K> {
    /// Create an empty tree: a single external root
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(Node::external(None));
        TwoFourTree { arena, root, len: 0 }
    }

    /// Insert a key into the tree.
    /// If an equal key was already present, it is replaced and the old one is returned.
    /// The shape of the tree is not changed in that case
    pub fn insert(&mut self, key: K) -> Option<K> {
        // Find the bottom-most internal node whose interval holds the key, or the external root
        let mut id = self.root;
        loop {
            let node = &mut self.arena[id];
            if node.contains(&key) {
                return node.replace_value(key);
            }
            let next = node.find_child_for(&key);
            match next {
                Some(child) if !self.arena[child].is_external() => id = child,
                _ => break,
            }
        }

        // The key takes a fresh external node as its left child
        self.arena.insert_local(id, key, None);
        self.len += 1;
        self.resolve_overflow(id);
        None
    }

    /// Return whether a key equal to `key` is stored in the tree
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Return the stored key equal to `key`, if any
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut id = self.root;
        loop {
            let node = &self.arena[id];
            if let Some(found) = node.get(key) {
                return Some(found);
            }
            id = node.find_child_for(key)?;
        }
    }

    /// Return the total number of keys in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of internal levels: 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut id = self.root;
        while let Some(&child) = self.arena[id].children().first() {
            height += 1;
            id = child;
        }
        height
    }

    /// Collect references to every key, in order
    #[cfg(test)]
    pub(crate) fn keys_in_order(&self) -> Vec<&K> {
        fn walk<'a, K>(arena: &'a Arena<K>, id: NodeId, out: &mut Vec<&'a K>) {
            let node = &arena[id];
            for (i, &child) in node.children().iter().enumerate() {
                walk(arena, child, out);
                if let Some(key) = node.keys().get(i) {
                    out.push(key);
                }
            }
        }

        let mut keys = Vec::with_capacity(self.len);
        walk(&self.arena, self.root, &mut keys);
        keys
    }

    /// Split nodes holding more than `MAX_KEYS` keys, walking up from `id` until a node is
    /// within capacity. Splitting the root grows the tree by one level
    fn resolve_overflow(&mut self, mut id: NodeId) {
        while self.arena[id].len() > MAX_KEYS {
            let (parent, median, left, right) = self.arena.split(id);
            match parent {
                None => {
                    self.root = self.arena.new_two_node(median, left, right);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(height = self.height(), len = self.len, "root split");
                    return;
                }
                Some(parent) => {
                    let index = self.arena.insert_local(parent, median, Some(left));
                    self.arena.replace_child_at(parent, index + 1, right);
                    id = parent;
                }
            }
        }
    }
}

impl<K: Ord> Default for TwoFourTree<K> {
    fn default() -> Self {
        TwoFourTree::new()
    }
}

impl<K: Ord> Extend<K> for TwoFourTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> std::iter::FromIterator<K> for TwoFourTree<K> {
    /// Create a tree by inserting each key in order. Later keys replace earlier equal ones
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = TwoFourTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: fmt::Display> TwoFourTree<K> {
    fn fmt_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.arena[id];
        f.write_str("[")?;
        for (i, &child) in node.children().iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", node.keys()[i - 1])?;
            }
            self.fmt_node(child, f)?;
        }
        f.write_str("]")
    }
}

/// Render the tree in bracketed form `[child key child ... child]`, where external nodes show
/// up as `[]`. Meant for humans, not as a stable format
impl<K: fmt::Display> fmt::Display for TwoFourTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.root, f)
    }
}

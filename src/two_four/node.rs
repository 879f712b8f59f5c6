use super::arena::Arena;
use super::*;

/// Handle to a node stored in an `Arena`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct NodeId(usize);

impl NodeId {
    pub(super) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub(super) fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
pub(super) enum NodeKind<K> {
    /// Placeholder marking an empty position where a future key may be inserted
    External,
    /// Child `i` covers the values strictly between `keys[i - 1]` and `keys[i]`
    Internal { keys: Keys<K>, children: Children },
}

#[derive(Clone)]
pub(super) struct Node<K> {
    pub(super) kind: NodeKind<K>,
    /// Used only to walk up while resolving overflows
    pub(super) parent: Option<NodeId>,
}

impl<K> Node<K> {
    pub(super) fn external(parent: Option<NodeId>) -> Self {
        Node {
            kind: NodeKind::External,
            parent,
        }
    }

    pub(super) fn is_external(&self) -> bool {
        match self.kind {
            NodeKind::External => true,
            NodeKind::Internal { .. } => false,
        }
    }

    /// Return the keys in ascending order (empty for external nodes)
    pub(super) fn keys(&self) -> &[K] {
        match &self.kind {
            NodeKind::External => &[],
            NodeKind::Internal { keys, .. } => keys,
        }
    }

    /// Return the children (empty for external nodes)
    pub(super) fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::External => &[],
            NodeKind::Internal { children, .. } => children,
        }
    }

    /// Return the total number of keys in this node
    pub(super) fn len(&self) -> usize {
        self.keys().len()
    }
}

impl<K: Ord> Node<K> {
    /// Return whether a key equal to `key` is stored in this node
    pub(super) fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Return the stored key equal to `key`, if any
    pub(super) fn get(&self, key: &K) -> Option<&K> {
        self.keys().iter().find(|k| *k == key)
    }

    /// Return the child whose interval contains `key`: the one before the first greater key,
    /// or the last one. External nodes have none
    pub(super) fn find_child_for(&self, key: &K) -> Option<NodeId> {
        let keys = self.keys();
        let index = keys.iter().position(|k| k > key).unwrap_or(keys.len());
        self.children().get(index).copied()
    }

    /// Overwrite the stored key equal to `key`, returning the previous version
    pub(super) fn replace_value(&mut self, key: K) -> Option<K> {
        match &mut self.kind {
            NodeKind::External => None,
            NodeKind::Internal { keys, .. } => keys
                .iter_mut()
                .find(|k| **k == key)
                .map(|k| std::mem::replace(k, key)),
        }
    }
}

impl<K: Ord> Arena<K> {
    /// Build an internal node from its keys and one more child, adopting every child.
    /// Panics if the counts do not match
    pub(super) fn new_internal(&mut self, keys: Keys<K>, children: Children) -> NodeId {
        assert!(!keys.is_empty());
        assert_eq!(children.len(), keys.len() + 1);
        let adopted = children.clone();
        let id = self.alloc(Node {
            kind: NodeKind::Internal { keys, children },
            parent: None,
        });
        for child in adopted {
            self[child].parent = Some(id);
        }
        id
    }

    /// Build a 2-node `[left key right]`
    pub(super) fn new_two_node(&mut self, key: K, left: NodeId, right: NodeId) -> NodeId {
        let mut keys = Keys::new();
        keys.push(key);
        let mut children = Children::new();
        children.push(left);
        children.push(right);
        self.new_internal(keys, children)
    }

    /// Insert `key` into the node `id`, at the position that keeps its keys ascending.
    /// `child` becomes the child to the left of the new key; without one a fresh external node is
    /// used. An external node is first turned into an internal one.
    /// Return the position of the inserted key.
    ///
    /// The node may be left holding 4 keys: resolving that overflow is up to the caller
    pub(super) fn insert_local(&mut self, id: NodeId, key: K, child: Option<NodeId>) -> usize {
        if self[id].is_external() {
            let counterpart = self.alloc(Node::external(Some(id)));
            let mut children = Children::new();
            children.push(counterpart);
            self[id].kind = NodeKind::Internal {
                keys: Keys::new(),
                children,
            };
        }

        let child = match child {
            Some(child) => {
                self[child].parent = Some(id);
                child
            }
            None => self.alloc(Node::external(Some(id))),
        };

        match &mut self[id].kind {
            NodeKind::Internal { keys, children } => {
                let index = keys.iter().position(|k| *k > key).unwrap_or(keys.len());
                keys.insert(index, key);
                children.insert(index, child);
                index
            }
            NodeKind::External => unreachable!("node was converted above"),
        }
    }

    /// Overwrite the child at `index`, pointing its back-reference to `id`.
    /// Panics on external nodes or out-of-bounds access
    pub(super) fn replace_child_at(&mut self, id: NodeId, index: usize, child: NodeId) {
        match &mut self[id].kind {
            NodeKind::Internal { children, .. } => children[index] = child,
            NodeKind::External => panic!("External nodes have no children"),
        }
        self[child].parent = Some(id);
    }

    /// Consume an overflowing node, splitting it into (left, median, right).
    /// The median is the key at `len / 2`: for 4 keys, left keeps 2 and right gets 1.
    /// Return the former parent of the node, the median and the two new nodes
    pub(super) fn split(&mut self, id: NodeId) -> (Option<NodeId>, K, NodeId, NodeId) {
        let Node { kind, parent } = self.release(id);
        let (mut keys, mut children) = match kind {
            NodeKind::Internal { keys, children } => (keys, children),
            NodeKind::External => panic!("External nodes never overflow"),
        };

        let med = keys.len() / 2;
        let right_keys: Keys<K> = keys.drain(med + 1..).collect();
        let right_children: Children = children.drain(med + 1..).collect();
        let median = keys.remove(med);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            left = keys.len(),
            right = right_keys.len(),
            "splitting overflowing node"
        );

        let left = self.new_internal(keys, children);
        let right = self.new_internal(right_keys, right_children);
        (parent, median, left, right)
    }
}

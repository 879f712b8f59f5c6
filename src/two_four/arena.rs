use super::node::{Node, NodeId};
use std::mem;
use std::ops::{Index, IndexMut};

/// Storage for every node of a tree.
/// A node is reachable from exactly one parent (or is the root): the arena only holds the
/// memory, and `NodeId` handles stored in `Node::parent` never own anything
#[derive(Clone)]
pub(super) struct Arena<K> {
    slots: Vec<Node<K>>,
    /// Slots released by splits, reused by the next allocations
    free: Vec<NodeId>,
}

impl<K> Arena<K> {
    pub(super) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a node and return its handle
    pub(super) fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = node;
                id
            }
            None => {
                self.slots.push(node);
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    /// Take the node out of its slot and make the slot available again.
    /// The caller must drop every handle to `id` it still holds, or overwrite it
    pub(super) fn release(&mut self, id: NodeId) -> Node<K> {
        self.free.push(id);
        mem::replace(&mut self.slots[id.index()], Node::external(None))
    }

    /// Number of occupied slots
    #[cfg(test)]
    pub(super) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        &self.slots[id.index()]
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.slots[id.index()]
    }
}

use super::node::{NodeId, NodeKind};
use super::tree::TwoFourTree;
use super::*;
use crate::error::{InvariantViolation, Result};
use std::fmt;

impl<K: Ord + fmt::Debug> TwoFourTree<K> {
    /// Check every structural rule of the tree, stopping at the first violation:
    /// 1. internal nodes have 1 to 3 keys and one more child
    /// 2. keys are strictly increasing inside each node
    /// 3. keys lie strictly between the bounds set by their ancestors
    /// 4. external nodes hold nothing (guaranteed by `NodeKind`)
    /// 5. each child points back at the node holding it, and the root has no parent
    /// 6. all external nodes are at the same depth
    ///
    /// This is a read-only traversal, meant for tests and debugging
    pub fn verify(&self) -> Result<()> {
        let root = &self.arena[self.root];
        if root.parent.is_some() {
            return Err(InvariantViolation::RootHasParent {
                root: describe(root.keys()),
            });
        }
        self.verify_node(self.root, None, None).map(|_| ())
    }

    /// Verify the subtree at `id`, whose keys must lie strictly between `min` and `max`.
    /// Return its height (0 for external nodes)
    fn verify_node(&self, id: NodeId, min: Option<&K>, max: Option<&K>) -> Result<usize> {
        let (keys, children) = match &self.arena[id].kind {
            NodeKind::External => return Ok(0),
            NodeKind::Internal { keys, children } => (keys, children),
        };

        if keys.is_empty() || keys.len() > MAX_KEYS || children.len() != keys.len() + 1 {
            return Err(InvariantViolation::FanOut {
                node: describe(keys),
                keys: keys.len(),
                children: children.len(),
            });
        }

        for pair in keys.windows(2) {
            if pair[0] >= pair[1] {
                return Err(InvariantViolation::KeyOrder {
                    previous: format!("{:?}", pair[0]),
                    next: format!("{:?}", pair[1]),
                });
            }
        }

        // Keys are sorted at this point: checking the extremes is enough
        if let (Some(min), Some(first)) = (min, keys.first()) {
            if first <= min {
                return Err(InvariantViolation::BelowBound {
                    key: format!("{:?}", first),
                    min: format!("{:?}", min),
                });
            }
        }
        if let (Some(max), Some(last)) = (max, keys.last()) {
            if last >= max {
                return Err(InvariantViolation::AboveBound {
                    key: format!("{:?}", last),
                    max: format!("{:?}", max),
                });
            }
        }

        let mut height = None;
        for (position, &child) in children.iter().enumerate() {
            if self.arena[child].parent != Some(id) {
                return Err(InvariantViolation::ParentMismatch {
                    node: describe(keys),
                    position,
                });
            }

            let lower = position.checked_sub(1).map(|i| &keys[i]).or(min);
            let upper = keys.get(position).or(max);
            let child_height = self.verify_node(child, lower, upper)?;
            match height {
                None => height = Some(child_height),
                Some(expected) if expected != child_height => {
                    return Err(InvariantViolation::DepthMismatch {
                        node: describe(keys),
                        expected,
                        found: child_height,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(height.unwrap_or(0) + 1)
    }
}

fn describe<K: fmt::Debug>(keys: &[K]) -> String {
    format!("{:?}", keys)
}

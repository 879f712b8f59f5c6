use std::fmt;

/// Structural rule broken inside a `TwoFourTree`, as reported by `TwoFourTree::verify`.
/// Nodes are described by their keys (formatted with `Debug`), e.g. `[3, 6]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An internal node holds a number of keys outside `1..=3`, or its child count is not one
    /// more than its key count
    FanOut {
        node: String,
        keys: usize,
        children: usize,
    },
    /// Two adjacent keys in a node are not strictly increasing
    KeyOrder { previous: String, next: String },
    /// A key is not strictly greater than the lower bound inherited from its ancestors
    BelowBound { key: String, min: String },
    /// A key is not strictly smaller than the upper bound inherited from its ancestors
    AboveBound { key: String, max: String },
    /// Two children of the same node reach external nodes at different depths
    DepthMismatch {
        node: String,
        expected: usize,
        found: usize,
    },
    /// The child at `position` does not point back at the node holding it
    ParentMismatch { node: String, position: usize },
    /// The root points at a parent
    RootHasParent { root: String },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::FanOut {
                node,
                keys,
                children,
            } => write!(
                f,
                "Node {} violates the 2-4 fan-out: {} keys and {} children",
                node, keys, children
            ),
            InvariantViolation::KeyOrder { previous, next } => {
                write!(f, "Incorrect order between {} and {}", previous, next)
            }
            InvariantViolation::BelowBound { key, min } => {
                write!(f, "Key {} too small: must be greater than {}", key, min)
            }
            InvariantViolation::AboveBound { key, max } => {
                write!(f, "Key {} too large: must be smaller than {}", key, max)
            }
            InvariantViolation::DepthMismatch {
                node,
                expected,
                found,
            } => write!(
                f,
                "Children of node {} have unequal depths ({} and {})",
                node, expected, found
            ),
            InvariantViolation::ParentMismatch { node, position } => write!(
                f,
                "Child {} of node {} has an incorrect parent reference",
                position, node
            ),
            InvariantViolation::RootHasParent { root } => {
                write!(f, "Root node {} has a parent reference", root)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Verification result type
pub type Result<T> = std::result::Result<T, InvariantViolation>;

mod arena;
mod node;
mod tree;
mod verify;

pub use tree::TwoFourTree;

use arrayvec::ArrayVec;
use node::NodeId;

// Max number of keys per node. A node holds one more key only while it is overflowing
const MAX_KEYS: usize = 3;

type Keys<K> = ArrayVec<[K; MAX_KEYS + 1]>;
type Children = ArrayVec<[NodeId; MAX_KEYS + 2]>;

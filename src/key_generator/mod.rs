//! Deterministic key sequences, used to exercise trees in tests and benchmarks
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

//! An order-4 balanced multiway search tree, better known as a 2-4 tree.
//!
//! ```
//! use two_four_tree::TwoFourTree;
//!
//! let mut tree = TwoFourTree::new();
//! for n in vec![5, 3, 7, 6] {
//!     assert_eq!(tree.insert(n), None);
//! }
//! assert_eq!(tree.insert(7), Some(7));
//! assert!(tree.contains(&3));
//! assert_eq!(tree.to_string(), "[[[] 3 [] 5 []] 6 [[] 7 []]]");
//! assert_eq!(tree.verify(), Ok(()));
//! ```
#[cfg(test)]
mod tests;

pub mod error;

pub mod two_four;

#[cfg(feature = "key-generator")]
pub mod key_generator;

pub use error::InvariantViolation;
pub use two_four::TwoFourTree;

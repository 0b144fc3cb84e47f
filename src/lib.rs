//! Red-black rebalancing for binary trees whose shape is decided by the caller.
//!
//! The tree does three things only: link a new node at a given free child slot, unlink a node,
//! and keep the red-black properties through rotations and recoloring while doing so. Searching
//! for the insertion point, comparing values and deciding which node to remove is up to the
//! caller, who also owns every node: nodes live in a [`Forest`] and are addressed by [`NodeId`]
//! handles that the caller creates and destroys.
//!
//! ```
//! use intrusive_redblack::Forest;
//!
//! let mut forest = Forest::new();
//! let mut root = forest.create(0);
//! for value in 1..10 {
//!     // Sorted insertion: always after the current maximum
//!     let mut last = root;
//!     while let Some(right) = forest.right(last) {
//!         last = right;
//!     }
//!     let node = forest.create(value);
//!     forest.insert_right(last, node);
//!     root = forest.root(node);
//! }
//! assert!(forest.check(root).is_ok());
//! assert_eq!(forest[root], 3);
//! ```

#[cfg(test)]
mod tests;

pub mod rbtree;

#[cfg(any(test, feature = "shape-generator"))]
pub mod shape_generator;

pub use rbtree::{Color, Direction, Forest, InvariantViolation, Node, NodeId};

mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

use crate::rbtree::{Direction, Forest, NodeId};

/// A strategy to pick where the next node goes, standing in for the key comparisons
/// a real caller would do
pub trait Placement {
    /// Return a node of the tree rooted at `root` together with one of its free child slots
    fn next_slot<T>(&mut self, forest: &Forest<T>, root: NodeId) -> (NodeId, Direction);
}

/// Create one node for each value and attach it where `placement` decides.
/// Return the root of the resulting tree
pub fn grow<T, P, I>(forest: &mut Forest<T>, root: NodeId, placement: &mut P, values: I) -> NodeId
where
    P: Placement,
    I: IntoIterator<Item = T>,
{
    let mut root = root;
    for value in values {
        let (parent, dir) = placement.next_slot(forest, root);
        let node = forest.create(value);
        forest.insert(parent, node, dir);
        root = forest.root(parent);
    }
    root
}

use super::Placement;
use crate::rbtree::{Direction, Forest, NodeId};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

/// Places each node right after (or before) every node already in the tree,
/// which is what inserting sorted keys looks like
pub struct SequentialPlacement {
    direction: Direction,
}

impl SequentialPlacement {
    pub fn new(order: SequentialOrder) -> SequentialPlacement {
        let direction = match order {
            SequentialOrder::Ascending => Direction::Right,
            SequentialOrder::Descending => Direction::Left,
        };
        SequentialPlacement { direction }
    }
}

impl Placement for SequentialPlacement {
    fn next_slot<T>(&mut self, forest: &Forest<T>, root: NodeId) -> (NodeId, Direction) {
        let mut node = root;
        while let Some(child) = forest.child(node, self.direction) {
            node = child;
        }
        (node, self.direction)
    }
}

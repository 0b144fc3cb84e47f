use super::Placement;
use crate::rbtree::{Direction, Forest, NodeId};
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Places each node at a random free slot: starting from the root, a fair coin decides which
/// way to go down at every level until a missing child is found.
/// The same seed always produces the same sequence of slots for the same tree
pub struct RandomPlacement {
    rng: Pcg64,
}

impl RandomPlacement {
    pub fn new(seed: u64) -> RandomPlacement {
        RandomPlacement {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    fn next_direction(&mut self) -> Direction {
        if self.rng.gen::<bool>() {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

impl Placement for RandomPlacement {
    fn next_slot<T>(&mut self, forest: &Forest<T>, root: NodeId) -> (NodeId, Direction) {
        let mut node = root;
        loop {
            let dir = self.next_direction();
            match forest.child(node, dir) {
                Some(child) => node = child,
                None => return (node, dir),
            }
        }
    }
}

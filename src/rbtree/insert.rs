use super::*;
use log::trace;

impl<T> Forest<T> {
    /// Attach the free node `node` as the left child of `parent`, then rebalance.
    ///
    /// `parent` must not have a left child already: finding the right place to insert is the
    /// job of the caller. The root of the tree may change, so call `root` afterwards.
    pub fn insert_left(&mut self, parent: NodeId, node: NodeId) {
        self.insert(parent, node, Direction::Left);
    }

    /// Attach the free node `node` as the right child of `parent`, then rebalance.
    /// See `insert_left`
    pub fn insert_right(&mut self, parent: NodeId, node: NodeId) {
        self.insert(parent, node, Direction::Right);
    }

    /// Attach the free node `node` as the `dir` child of `parent`, then rebalance
    pub fn insert(&mut self, parent: NodeId, node: NodeId, dir: Direction) {
        debug_assert!(self.node(node).is_free(), "inserting linked node {}", node);
        debug_assert!(
            self.child(parent, dir).is_none(),
            "{} already has a {:?} child",
            parent,
            dir
        );

        let new_node = self.node_mut(node);
        new_node.parent = Some(parent);
        new_node.color = Color::Red;
        self.set_child(parent, dir, Some(node));

        let mut next = Some(node);
        while let Some(current) = next {
            next = self.insert_fixup_step(current);
        }
    }

    /// Resolve a possible red-red edge between the red node `node` and its parent.
    /// Return the next node to operate on, if any
    fn insert_fixup_step(&mut self, node: NodeId) -> Option<NodeId> {
        let parent = match self.parent(node) {
            None => {
                self.set_color(node, Color::Black);
                return None;
            }
            Some(parent) => parent,
        };
        if self.is_black(parent) {
            return None;
        }

        let grandparent = self
            .parent(parent)
            .expect("a red node is never the root");
        let parent_side = self.side(parent);
        let uncle = self.child(grandparent, parent_side.opposite());
        let node_side = self.side(node);

        match uncle {
            Some(uncle) if self.is_red(uncle) => {
                trace!("insert {}: red uncle {}", node, uncle);
                self.set_color(uncle, Color::Black);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                Some(grandparent)
            }
            _ if node_side != parent_side => {
                // Triangle: turn it into a line and let the next step finish the job
                trace!("insert {}: triangle under {}", node, grandparent);
                self.rotate(parent, node_side.opposite());
                Some(parent)
            }
            _ => {
                trace!("insert {}: line under {}", node, grandparent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, node_side.opposite());
                None
            }
        }
    }
}

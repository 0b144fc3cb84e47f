use super::*;
use log::trace;

impl<T> Forest<T> {
    /// Unlink `node` from its tree and rebalance what remains.
    ///
    /// After this call `node` is free again: black and without links, ready to be reinserted or
    /// destroyed. The root of the tree may change and `node` no longer leads to it, so keep some
    /// other node of the tree around (for instance a child of a root being removed) and call `root`
    /// on it afterwards.
    pub fn remove(&mut self, node: NodeId) {
        if let (Some(_), Some(right)) = (self.left(node), self.right(node)) {
            let mut successor = right;
            while let Some(left) = self.left(successor) {
                successor = left;
            }
            self.swap_with_successor(node, successor);
        }

        // From here on the node has at most one child
        let replacer = match (self.left(node), self.right(node)) {
            (Some(child), _) => {
                self.transplant(node, child);
                self.set_child(node, Direction::Left, None);
                child
            }
            (None, Some(child)) => {
                self.transplant(node, child);
                self.set_child(node, Direction::Right, None);
                child
            }
            // The node stays in place as a nil placeholder while the tree is repaired
            (None, None) => node,
        };

        if self.is_black(node) {
            let mut next = Some(replacer);
            while let Some(current) = next {
                next = self.remove_fixup_step(current);
            }
        }

        // Either a red node was removed and the replacer is already black, or a black node was
        // removed and the replacer takes over its color
        self.set_color(replacer, Color::Black);
        if replacer == node {
            if let Some(parent) = self.parent(node) {
                let side = self.side(node);
                self.set_child(parent, side, None);
            }
        }
        self.node_mut(node).reset();
    }

    /// Exchange the tree positions of `node` and its in-order successor, together with their
    /// colors. Values stay where they are, so `T` never needs to be moved or cloned.
    /// Afterwards `node` sits where the successor was and has no left child
    fn swap_with_successor(&mut self, node: NodeId, successor: NodeId) {
        let left = self.left(node).expect("successor splice requires a left child");
        let right = self.right(node).expect("successor splice requires a right child");
        let successor_right = self.right(successor);

        if successor == right {
            // The node becomes the right child of its successor
            self.transplant(node, successor);
            self.set_child(successor, Direction::Right, Some(node));
            self.set_parent(node, Some(successor));
        } else {
            // The successor is the leftmost node of a deeper subtree: the node takes over its
            // slot as a left child
            let successor_parent = self
                .parent(successor)
                .expect("a deep successor has a parent");
            self.transplant(node, successor);
            self.set_child(successor, Direction::Right, Some(right));
            self.set_parent(right, Some(successor));
            self.set_child(successor_parent, Direction::Left, Some(node));
            self.set_parent(node, Some(successor_parent));
        }

        self.set_child(node, Direction::Right, successor_right);
        if let Some(successor_right) = successor_right {
            self.set_parent(successor_right, Some(node));
        }
        self.set_child(successor, Direction::Left, Some(left));
        self.set_parent(left, Some(successor));
        self.set_child(node, Direction::Left, None);

        let node_color = self.color(node);
        let successor_color = self.color(successor);
        self.set_color(node, successor_color);
        self.set_color(successor, node_color);
    }

    /// Resolve a missing black node on the paths going through `node`.
    /// Return the next node to operate on, if any
    fn remove_fixup_step(&mut self, node: NodeId) -> Option<NodeId> {
        let parent = match self.parent(node) {
            Some(parent) if self.is_black(node) => parent,
            _ => {
                self.set_color(node, Color::Black);
                return None;
            }
        };

        let side = self.side(node);
        let sibling_side = side.opposite();
        let sibling = self
            .child(parent, sibling_side)
            .expect("a node short of one black has a sibling");

        if self.is_red(sibling) {
            trace!("remove {}: red sibling {}", node, sibling);
            self.set_color(sibling, Color::Black);
            self.set_color(parent, Color::Red);
            self.rotate(parent, side);
            return Some(node);
        }

        let near = self.child(sibling, side);
        let far = self.child(sibling, sibling_side);
        if !self.is_red_link(near) && !self.is_red_link(far) {
            trace!("remove {}: black sibling {} with black children", node, sibling);
            self.set_color(sibling, Color::Red);
            return Some(parent);
        }

        match far {
            Some(far) if self.is_red(far) => {
                trace!("remove {}: black sibling {} with red far child", node, sibling);
                let parent_color = self.color(parent);
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                self.set_color(far, Color::Black);
                self.rotate(parent, side);
                if self.is_root(sibling) {
                    Some(sibling)
                } else {
                    None
                }
            }
            _ => {
                trace!("remove {}: black sibling {} with red near child", node, sibling);
                let near = near.expect("the near child is red");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, sibling_side);
                Some(node)
            }
        }
    }
}

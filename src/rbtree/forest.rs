use super::*;
use slab::Slab;
use std::ops::{Index, IndexMut};

/// Caller-owned storage for red-black nodes.
///
/// The forest only keeps node memory around: which nodes exist and for how long is decided
/// entirely by the caller through `create` and `destroy`. Any node acts as an entry point to the
/// tree it belongs to, and many independent trees can live in the same forest.
///
/// The tree never compares values. To insert, the caller walks down from the root with
/// `left`/`right` to find a free child slot and calls `insert_left` or `insert_right` there.
/// Rebalancing may move the root, so it must be derived again with `root` after every
/// insertion or removal.
#[derive(Debug, Clone)]
pub struct Forest<T> {
    nodes: Slab<Node<T>>,
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Forest { nodes: Slab::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Forest {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Allocate a new free node, which is also a single-node tree
    pub fn create(&mut self, value: T) -> NodeId {
        NodeId(self.nodes.insert(Node::new(value)))
    }

    /// Release the storage of a node and return its value.
    /// The node must not be linked into a tree anymore
    pub fn destroy(&mut self, id: NodeId) -> T {
        debug_assert!(self.nodes[id.0].is_free(), "destroying linked node {}", id);
        self.nodes.remove(id.0).value
    }

    /// Number of allocated nodes, linked or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.0].value
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].left
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].right
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn child(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        self.nodes[id.0].child(dir)
    }

    pub fn color(&self, id: NodeId) -> Color {
        self.nodes[id.0].color
    }

    pub fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    pub fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.parent(id).is_none()
    }

    /// Whether the node is the left child of its parent. A root counts as both left and right
    pub fn is_left(&self, id: NodeId) -> bool {
        match self.parent(id) {
            None => true,
            Some(parent) => self.left(parent) == Some(id),
        }
    }

    /// Whether the node is the right child of its parent. A root counts as both left and right
    pub fn is_right(&self, id: NodeId) -> bool {
        match self.parent(id) {
            None => true,
            Some(parent) => self.right(parent) == Some(id),
        }
    }

    /// Find the root of the tree containing `id`
    pub fn root(&self, id: NodeId) -> NodeId {
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            node = parent;
        }
        node
    }

    /// Side of its parent the node hangs from. Roots report `Left`
    pub(super) fn side(&self, id: NodeId) -> Direction {
        if self.is_left(id) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Missing links count as black
    pub(super) fn is_red_link(&self, link: Option<NodeId>) -> bool {
        link.map_or(false, |id| self.is_red(id))
    }

    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id.0].color = color;
    }

    pub(super) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id.0].parent = parent;
    }

    pub(super) fn set_child(&mut self, id: NodeId, dir: Direction, child: Option<NodeId>) {
        *self.nodes[id.0].child_mut(dir) = child;
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    /// Rotate `id` towards `dir`: its child on the opposite side takes its place and `id` becomes
    /// that child's `dir` child. The in-order sequence is preserved and colors are untouched
    pub(super) fn rotate(&mut self, id: NodeId, dir: Direction) {
        let pivot = self
            .child(id, dir.opposite())
            .expect("rotation requires a child on the promoted side");
        let parent = self.parent(id);
        if let Some(parent) = parent {
            let side = self.side(id);
            self.set_child(parent, side, Some(pivot));
        }
        self.set_parent(pivot, parent);
        self.set_parent(id, Some(pivot));

        // The inner subtree of the pivot changes side
        let inner = self.child(pivot, dir);
        self.set_child(id, dir.opposite(), inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(id));
        }
        self.set_child(pivot, dir, Some(id));
    }

    /// Put `replacer` where `id` hangs from its parent. The links of `id` itself are left as they are
    pub(super) fn transplant(&mut self, id: NodeId, replacer: NodeId) {
        let parent = self.parent(id);
        if let Some(parent) = parent {
            let side = self.side(id);
            self.set_child(parent, side, Some(replacer));
        }
        self.set_parent(replacer, parent);
    }
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Forest::new()
    }
}

impl<T> Index<NodeId> for Forest<T> {
    type Output = T;
    fn index(&self, id: NodeId) -> &T {
        self.value(id)
    }
}

impl<T> IndexMut<NodeId> for Forest<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.value_mut(id)
    }
}

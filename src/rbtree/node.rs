use super::*;

/// A tree node: the caller's payload plus the links maintained by the rebalancing code.
/// A node that is not linked to anything is a valid single-node tree
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The payload is never inspected by the tree
    pub value: T,
    pub(super) color: Color,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub(super) fn new(value: T) -> Self {
        Node {
            value,
            color: Color::Black,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child(&self, dir: Direction) -> Option<NodeId> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(super) fn child_mut(&mut self, dir: Direction) -> &mut Option<NodeId> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Whether the node is in the state it had right after creation:
    /// black and without any link
    pub fn is_free(&self) -> bool {
        self.color == Color::Black
            && self.left.is_none()
            && self.right.is_none()
            && self.parent.is_none()
    }

    /// Go back to the unlinked default state
    pub(super) fn reset(&mut self) {
        self.color = Color::Black;
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}

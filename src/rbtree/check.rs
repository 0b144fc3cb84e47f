use super::*;
use arrayvec::ArrayVec;
use std::error::Error;
use std::fmt;

/// Deepest tree the checker will walk. A valid red-black tree with less than 2^64 nodes
/// is never taller than this
const MAX_DEPTH: usize = 128;

/// A broken red-black tree property, as found by `Forest::check`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The node given as the root has a parent
    NotRoot(NodeId),
    RedRoot(NodeId),
    /// A red node has a red child
    RedRedEdge { parent: NodeId, child: NodeId },
    /// The paths through `node` do not all see the same number of black nodes
    BlackHeightMismatch { node: NodeId },
    /// `child` is linked from `parent`, but does not point back to it
    BrokenParentLink { parent: NodeId, child: NodeId },
    /// The tree is deeper than the checker can walk
    TooDeep,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::NotRoot(node) => write!(f, "node {} has a parent", node),
            InvariantViolation::RedRoot(node) => write!(f, "root {} is red", node),
            InvariantViolation::RedRedEdge { parent, child } => {
                write!(f, "red node {} has red child {}", parent, child)
            }
            InvariantViolation::BlackHeightMismatch { node } => {
                write!(f, "paths through {} have different black heights", node)
            }
            InvariantViolation::BrokenParentLink { parent, child } => write!(
                f,
                "node {} is a child of {} but does not link back to it",
                child, parent
            ),
            InvariantViolation::TooDeep => {
                write!(f, "tree is deeper than {} levels", MAX_DEPTH)
            }
        }
    }
}

impl Error for InvariantViolation {}

impl<T> Forest<T> {
    /// Verify every red-black property of the tree rooted at `root`:
    /// 1. the root is black and has no parent
    /// 2. no red node has a red child
    /// 3. every path from the root to a missing link crosses the same number of black nodes
    /// 4. child and parent links agree with each other
    ///
    /// Return the black height of the root (its own color excluded)
    pub fn check(&self, root: NodeId) -> Result<usize, InvariantViolation> {
        if !self.is_root(root) {
            return Err(InvariantViolation::NotRoot(root));
        }
        if self.is_red(root) {
            return Err(InvariantViolation::RedRoot(root));
        }

        // Depth-first walk carrying the number of black nodes from the root down to each node,
        // the node itself included
        let mut pending: ArrayVec<[(NodeId, usize); MAX_DEPTH]> = ArrayVec::new();
        pending.push((root, 1));
        let mut path_blacks: Option<usize> = None;

        while let Some((node, blacks)) = pending.pop() {
            for &dir in &[Direction::Right, Direction::Left] {
                match self.child(node, dir) {
                    None => match path_blacks {
                        None => path_blacks = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(InvariantViolation::BlackHeightMismatch { node });
                        }
                        Some(_) => {}
                    },
                    Some(child) => {
                        if self.parent(child) != Some(node) {
                            return Err(InvariantViolation::BrokenParentLink {
                                parent: node,
                                child,
                            });
                        }
                        let child_blacks = match self.color(child) {
                            Color::Black => blacks + 1,
                            Color::Red if self.is_red(node) => {
                                return Err(InvariantViolation::RedRedEdge {
                                    parent: node,
                                    child,
                                });
                            }
                            Color::Red => blacks,
                        };
                        pending
                            .try_push((child, child_blacks))
                            .map_err(|_| InvariantViolation::TooDeep)?;
                    }
                }
            }
        }

        // The walk always reaches at least one missing link below the root
        Ok(path_blacks.unwrap_or(1) - 1)
    }
}

use crate::rbtree::node::NodeRef;
use thiserror::Error;

/// Failures a mutating tree operation can report. The tree is left untouched
/// whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("failed to allocate storage for a tree node")]
    AllocFailed,
    #[error("node arena ran out of addressable slots")]
    CapacityOverflow
}

/// A broken red-black or search-tree property, as reported by `Tree::validate`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root {0:?} is red")]
    RedRoot(NodeRef),
    #[error("red node {parent:?} has red child {child:?}")]
    DoubleRed { parent: NodeRef, child: NodeRef },
    #[error("node {node:?} has black-height {left} on the left but {right} on the right")]
    BlackHeightMismatch { node: NodeRef, left: usize, right: usize },
    #[error("node {node:?} sorts before its in-order predecessor {predecessor:?}")]
    OrderViolation { node: NodeRef, predecessor: NodeRef },
    #[error("node {node:?} does not point back at its parent {expected:?}")]
    BrokenParentLink { node: NodeRef, expected: NodeRef },
    #[error("tree reports {expected} entries but {found} are reachable")]
    LengthMismatch { expected: usize, found: usize }
}

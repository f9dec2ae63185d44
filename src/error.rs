use crate::util::Side;

/// Ways a positional operation on a [`BinaryTree`](crate::BinaryTree) can be rejected.
///
/// Every operation checks its preconditions before touching the tree, so a returned error
/// always means the tree is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The position belongs to another tree or its node has been removed.
    #[error("invalid position: not a live node of this tree")]
    InvalidPosition,
    /// `add_root` was called on a tree that already has a root.
    #[error("can not add a root to a non-empty tree")]
    NonEmptyTree,
    /// The targeted child slot is occupied.
    #[error("position already has a {0} child")]
    ChildAlreadyExists(Side),
    /// `attach` targeted a node that has children.
    #[error("position is not an external node")]
    NotExternalNode,
    /// `remove` targeted a node with both children present.
    #[error("position to remove has two children")]
    TwoChildrenNode,
}

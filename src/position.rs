//! Handles to nodes.
//!
//! A [`Position`] pairs the identity of the tree that handed it out with the arena slot of
//! the node. The arena's generation counter takes care of removed nodes; the tree identity
//! takes care of positions from some other tree that happen to name the same slot.

use std::sync::atomic::{AtomicUsize, Ordering};

use generational_arena::Index;

static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identity of a tree instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(usize);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An opaque handle identifying a node within one specific tree.
///
/// Positions are only ever created by the tree that owns the node. They stay `Copy` and
/// cheap; a stale or foreign position is simply rejected with
/// [`TreeError::InvalidPosition`](crate::TreeError::InvalidPosition).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) tree: TreeId,
    pub(crate) index: Index,
}

impl Position {
    pub(crate) fn new(tree: TreeId, index: Index) -> Self {
        Self { tree, index }
    }
}

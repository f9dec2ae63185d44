use generational_arena::Index;

use crate::util::Side;

/// A node stored in a tree's arena. Links are arena indices into the same arena.
#[derive(Debug)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<E> Node<E> {
    pub(crate) fn new(element: E, parent: Option<Index>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Children in left-to-right order.
    pub(crate) fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }

    pub(crate) fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    pub(crate) fn is_external(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Which slot of this node holds `child`, if any.
    pub(crate) fn side_of(&self, child: Index) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

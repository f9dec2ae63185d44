//! A linked binary tree addressed by positions.
//!
//! # Examples
//!
//! ```
//! use binary_tree::{BinaryTree, TreeError};
//!
//! let mut tree = BinaryTree::new();
//!
//! let root = tree.add_root(5).unwrap();
//! let three = tree.add_left(root, 3).unwrap();
//! tree.add_right(root, 8).unwrap();
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.parent(three), Ok(Some(root)));
//!
//! // A slot can only be filled once.
//! assert_eq!(
//!     tree.add_left(root, 4),
//!     Err(TreeError::ChildAlreadyExists(binary_tree::Side::Left))
//! );
//!
//! // Removing a leaf hands its element back and retires the position.
//! assert_eq!(tree.remove(three), Ok(3));
//! assert_eq!(tree.element(three), Err(TreeError::InvalidPosition));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};

use crate::error::TreeError;
use crate::node::Node;
use crate::position::{Position, TreeId};
use crate::util::Side;

/// A mutable binary tree whose nodes are reached through [`Position`]s.
pub struct BinaryTree<E> {
    pub(crate) id: TreeId,
    pub(crate) nodes: Arena<Node<E>>,
    pub(crate) root: Option<Index>,
    // Mirrors `nodes.len()`; checked after every mutation in debug builds.
    pub(crate) size: usize,
}

impl<E> Default for BinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinaryTree<E> {
    /// Generate a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            id: TreeId::fresh(),
            nodes: Arena::with_capacity(capacity),
            root: None,
            size: 0,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root position, or `None` for an empty tree.
    pub fn root(&self) -> Option<Position> {
        self.root.map(|index| self.position(index))
    }

    /// The parent of `p`, or `None` if `p` is the root.
    pub fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.nodes[index].parent.map(|i| self.position(i)))
    }

    /// The left child of `p`, if any.
    pub fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.child(p, Side::Left)
    }

    /// The right child of `p`, if any.
    pub fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.child(p, Side::Right)
    }

    /// The child of `p` in the given slot, if any.
    pub fn child(&self, p: Position, side: Side) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.nodes[index].child(side).map(|i| self.position(i)))
    }

    /// The other child of `p`'s parent. `None` for the root or an only child.
    pub fn sibling(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        let Some(parent) = self.nodes[index].parent else {
            return Ok(None);
        };
        let parent = &self.nodes[parent];
        let side = parent
            .side_of(index)
            .expect("a parent always links back to its children");
        Ok(parent.child(side.opposite()).map(|i| self.position(i)))
    }

    /// Number of children (0, 1 or 2) of `p`.
    pub fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        let index = self.validate(p)?;
        Ok(self.nodes[index].num_children())
    }

    /// Whether `p` has at least one child.
    pub fn is_internal(&self, p: Position) -> Result<bool, TreeError> {
        self.is_external(p).map(|external| !external)
    }

    /// Whether `p` is a leaf.
    pub fn is_external(&self, p: Position) -> Result<bool, TreeError> {
        let index = self.validate(p)?;
        Ok(self.nodes[index].is_external())
    }

    /// Whether `p` is the root of this tree.
    pub fn is_root(&self, p: Position) -> Result<bool, TreeError> {
        let index = self.validate(p)?;
        Ok(self.root == Some(index))
    }

    /// Number of ancestors of `p`. The root has depth 0.
    pub fn depth(&self, p: Position) -> Result<usize, TreeError> {
        let mut index = self.validate(p)?;
        let mut depth = 0;
        while let Some(parent) = self.nodes[index].parent {
            index = parent;
            depth += 1;
        }
        Ok(depth)
    }

    /// Height of the subtree rooted at `p`, counting nodes, so a leaf has height 1.
    pub fn height_of(&self, p: Position) -> Result<usize, TreeError> {
        let index = self.validate(p)?;
        Ok(self.height_below(index))
    }

    /// The element stored at `p`.
    pub fn element(&self, p: Position) -> Result<&E, TreeError> {
        let index = self.validate(p)?;
        Ok(&self.nodes[index].element)
    }

    /// Mutable access to the element stored at `p`.
    pub fn element_mut(&mut self, p: Position) -> Result<&mut E, TreeError> {
        let index = self.validate(p)?;
        Ok(&mut self.nodes[index].element)
    }

    /// Stores `element` at `p` and returns the element it replaced.
    pub fn replace(&mut self, p: Position, element: E) -> Result<E, TreeError> {
        Ok(mem::replace(self.element_mut(p)?, element))
    }

    /// Creates the root of an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{BinaryTree, TreeError};
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root("a").unwrap();
    ///
    /// assert_eq!(tree.root(), Some(root));
    /// assert_eq!(tree.add_root("b"), Err(TreeError::NonEmptyTree));
    /// ```
    pub fn add_root(&mut self, element: E) -> Result<Position, TreeError> {
        if self.root.is_some() {
            log::debug!("rejected add_root on a tree of size {}", self.size);
            return Err(TreeError::NonEmptyTree);
        }
        let index = self.nodes.insert(Node::new(element, None));
        self.root = Some(index);
        self.size = 1;
        log::trace!("added root {index:?}");
        self.check_size();
        Ok(self.position(index))
    }

    /// Adds a leaf holding `element` as the left child of `p`.
    pub fn add_left(&mut self, p: Position, element: E) -> Result<Position, TreeError> {
        self.add_child(p, Side::Left, element)
    }

    /// Adds a leaf holding `element` as the right child of `p`.
    pub fn add_right(&mut self, p: Position, element: E) -> Result<Position, TreeError> {
        self.add_child(p, Side::Right, element)
    }

    /// Adds a leaf holding `element` in the given child slot of `p`. The slot must be empty.
    pub fn add_child(
        &mut self,
        p: Position,
        side: Side,
        element: E,
    ) -> Result<Position, TreeError> {
        let parent = self.validate(p)?;
        if self.nodes[parent].child(side).is_some() {
            log::debug!("rejected add_child: {parent:?} already has a {side} child");
            return Err(TreeError::ChildAlreadyExists(side));
        }
        let child = self.nodes.insert(Node::new(element, Some(parent)));
        *self.nodes[parent].child_mut(side) = Some(child);
        self.size += 1;
        log::trace!("added {side} child {child:?} under {parent:?}");
        self.check_size();
        Ok(self.position(child))
    }

    /// Hangs `left` and `right` under the leaf `p` and leaves both donors empty.
    ///
    /// The donors' nodes move into this tree, so positions previously obtained from a donor
    /// are no longer valid anywhere. An empty donor leaves its side of `p` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(1).unwrap();
    ///
    /// let mut left = BinaryTree::new();
    /// left.add_root(2).unwrap();
    /// let mut right = BinaryTree::new();
    ///
    /// tree.attach(root, &mut left, &mut right).unwrap();
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert!(left.is_empty());
    /// let two = tree.left(root).unwrap().unwrap();
    /// assert_eq!(tree.element(two), Ok(&2));
    /// assert_eq!(tree.right(root), Ok(None));
    /// ```
    pub fn attach(
        &mut self,
        p: Position,
        left: &mut BinaryTree<E>,
        right: &mut BinaryTree<E>,
    ) -> Result<(), TreeError> {
        let parent = self.validate(p)?;
        if !self.nodes[parent].is_external() {
            log::debug!("rejected attach: {parent:?} is not external");
            return Err(TreeError::NotExternalNode);
        }
        for (donor, side) in [(left, Side::Left), (right, Side::Right)] {
            let Some(donor_root) = donor.root.take() else {
                continue;
            };
            let moved = mem::take(&mut donor.size);
            self.splice(&mut donor.nodes, donor_root, parent, side);
            donor.nodes.clear();
            self.size += moved;
            log::trace!("attached {moved} nodes as the {side} subtree of {parent:?}");
        }
        self.check_size();
        Ok(())
    }

    /// Moves the subtree at `donor_root` out of `donor` and links it into `side` of `parent`.
    fn splice(&mut self, donor: &mut Arena<Node<E>>, donor_root: Index, parent: Index, side: Side) {
        let mut pending = vec![(donor_root, parent, side)];
        while let Some((old, parent, side)) = pending.pop() {
            let node = donor
                .remove(old)
                .expect("child links always point at live nodes");
            let new = self.nodes.insert(Node::new(node.element, Some(parent)));
            *self.nodes[parent].child_mut(side) = Some(new);
            pending.extend(node.left.map(|child| (child, new, Side::Left)));
            pending.extend(node.right.map(|child| (child, new, Side::Right)));
        }
    }

    /// Removes `p`, which must have at most one child, and returns its element.
    ///
    /// The only child (if any) takes `p`'s place under `p`'s parent, or becomes the new root.
    /// `p` is invalid afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(1).unwrap();
    /// let child = tree.add_left(root, 2).unwrap();
    ///
    /// assert_eq!(tree.remove(root), Ok(1));
    /// assert_eq!(tree.root(), Some(child));
    /// assert_eq!(tree.parent(child), Ok(None));
    /// ```
    pub fn remove(&mut self, p: Position) -> Result<E, TreeError> {
        let target = self.validate(p)?;
        let (child, parent) = {
            let node = &self.nodes[target];
            if node.num_children() == 2 {
                log::debug!("rejected remove: {target:?} has two children");
                return Err(TreeError::TwoChildrenNode);
            }
            (node.left.or(node.right), node.parent)
        };

        match parent {
            None => self.root = child,
            Some(parent) => {
                let side = self.nodes[parent]
                    .side_of(target)
                    .expect("a parent always links back to its children");
                *self.nodes[parent].child_mut(side) = child;
            }
        }
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        self.size -= 1;

        let removed = self
            .nodes
            .remove(target)
            .expect("validated index is live");
        log::trace!("removed {target:?}");
        self.check_size();
        Ok(removed.element)
    }

    /// Returns an independent tree with the same shape and elements.
    ///
    /// Every node is freshly allocated; positions of `self` are not valid in the copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(1).unwrap();
    /// tree.add_right(root, 2).unwrap();
    ///
    /// let mut copy = tree.copy();
    /// assert!(copy.equal_to(&tree));
    ///
    /// let copy_root = copy.root().unwrap();
    /// copy.replace(copy_root, 7).unwrap();
    /// assert_eq!(tree.element(root), Ok(&1));
    /// ```
    pub fn copy(&self) -> Self
    where
        E: Clone,
    {
        let mut copy = Self::with_capacity(self.size);
        let Some(root) = self.root else {
            return copy;
        };
        let new_root = copy
            .nodes
            .insert(Node::new(self.nodes[root].element.clone(), None));
        copy.root = Some(new_root);

        let mut queue = VecDeque::from([(root, new_root)]);
        while let Some((old, new)) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                let Some(old_child) = self.nodes[old].child(side) else {
                    continue;
                };
                let element = self.nodes[old_child].element.clone();
                let new_child = copy.nodes.insert(Node::new(element, Some(new)));
                *copy.nodes[new].child_mut(side) = Some(new_child);
                queue.push_back((old_child, new_child));
            }
        }
        copy.size = self.size;
        copy.check_size();
        copy
    }

    /// Whether both trees have the same shape with equal elements in corresponding nodes.
    /// Two empty trees are equal.
    pub fn equal_to(&self, other: &BinaryTree<E>) -> bool
    where
        E: PartialEq,
    {
        if self.size != other.size {
            return false;
        }
        let mut queue = VecDeque::new();
        match (self.root, other.root) {
            (None, None) => return true,
            (Some(a), Some(b)) => queue.push_back((a, b)),
            _ => return false,
        }

        while let Some((a, b)) = queue.pop_front() {
            let (a, b) = (&self.nodes[a], &other.nodes[b]);
            if a.element != b.element {
                return false;
            }
            for side in [Side::Left, Side::Right] {
                match (a.child(side), b.child(side)) {
                    (None, None) => {}
                    (Some(a), Some(b)) => queue.push_back((a, b)),
                    _ => return false,
                }
            }
        }
        true
    }

    /// Resolves `p` to a live node of this tree.
    fn validate(&self, p: Position) -> Result<Index, TreeError> {
        if p.tree != self.id || !self.nodes.contains(p.index) {
            return Err(TreeError::InvalidPosition);
        }
        Ok(p.index)
    }

    fn position(&self, index: Index) -> Position {
        Position::new(self.id, index)
    }

    fn check_size(&self) {
        debug_assert_eq!(self.size, self.nodes.len());
    }
}

impl<E: Clone> Clone for BinaryTree<E> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<E: PartialEq> PartialEq for BinaryTree<E> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl<E: Eq> Eq for BinaryTree<E> {}

impl<E> fmt::Debug for BinaryTree<E>
where
    E: fmt::Debug,
{
    // Level by level, so deep trees don't recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut levels = Vec::new();
        let mut level: Vec<Index> = self.root.into_iter().collect();
        while !level.is_empty() {
            levels.push(
                level
                    .iter()
                    .map(|&index| &self.nodes[index].element)
                    .collect::<Vec<_>>(),
            );
            level = level
                .iter()
                .flat_map(|&index| self.nodes[index].children())
                .collect();
        }
        f.debug_struct("BinaryTree")
            .field("size", &self.size)
            .field("levels", &levels)
            .finish()
    }
}

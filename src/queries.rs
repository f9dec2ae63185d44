//! Structural and ordering queries over a [`BinaryTree`].
//!
//! Every query walks the live nodes on demand; nothing is cached between calls. Walks use an
//! explicit queue or stack so deep, degenerate trees can't overflow the call stack.

use std::collections::{HashMap, VecDeque};

use generational_arena::Index;

use crate::tree::BinaryTree;
use crate::util::Side;

/// Breadth-first walk over node indices.
pub(crate) struct LevelOrder<'a, E> {
    tree: &'a BinaryTree<E>,
    queue: VecDeque<Index>,
}

impl<'a, E> Iterator for LevelOrder<'a, E> {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        let index = self.queue.pop_front()?;
        self.queue.extend(self.tree.nodes[index].children());
        Some(index)
    }
}

impl<E> BinaryTree<E> {
    pub(crate) fn level_order(&self) -> LevelOrder<'_, E> {
        LevelOrder {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Computes subtree heights children-first, handing each node's child heights to `visit`.
    ///
    /// Returns the height of `start`, or `None` as soon as `visit` rejects a node.
    fn post_order_height(
        &self,
        start: Index,
        mut visit: impl FnMut(usize, usize) -> bool,
    ) -> Option<usize> {
        let mut heights: HashMap<Index, usize> = HashMap::new();
        let mut stack = vec![(start, false)];
        while let Some((index, expanded)) = stack.pop() {
            let node = &self.nodes[index];
            if !expanded {
                stack.push((index, true));
                stack.extend(node.children().map(|child| (child, false)));
                continue;
            }
            // Children are finished and no longer needed once their parent is.
            let mut child_height = |side: Side| {
                node.child(side)
                    .map_or(0, |child| heights.remove(&child).unwrap_or(0))
            };
            let left = child_height(Side::Left);
            let right = child_height(Side::Right);
            if !visit(left, right) {
                return None;
            }
            heights.insert(index, 1 + left.max(right));
        }
        heights.remove(&start)
    }

    pub(crate) fn height_below(&self, index: Index) -> usize {
        self.post_order_height(index, |_, _| true).unwrap_or(0)
    }

    /// Whether some node holds an element equal to `element`.
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
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.level_order()
            .any(|index| self.nodes[index].element == *element)
    }

    /// Number of nodes on the longest root-to-leaf path. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.height_below(root))
    }

    /// Whether every level is full except possibly the last, which is filled from the left.
    ///
    /// An empty tree is not considered complete.
    pub fn is_complete(&self) -> bool {
        if self.root.is_none() {
            return false;
        }
        // Once a missing child is seen, no later node in level order may have a child.
        let mut gap = false;
        for index in self.level_order() {
            let node = &self.nodes[index];
            for child in [node.left, node.right] {
                match child {
                    Some(_) if gap => return false,
                    Some(_) => {}
                    None => gap = true,
                }
            }
        }
        true
    }

    /// Whether the tree is complete and no child's element is smaller than its parent's.
    ///
    /// An empty tree is a valid min-heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(1).unwrap();
    /// let left = tree.add_left(root, 2).unwrap();
    /// tree.add_right(root, 3).unwrap();
    /// assert!(tree.is_min_heap());
    ///
    /// tree.replace(root, 2).unwrap();
    /// tree.replace(left, 1).unwrap();
    /// assert!(!tree.is_min_heap());
    /// ```
    pub fn is_min_heap(&self) -> bool
    where
        E: Ord,
    {
        if self.root.is_none() {
            return true;
        }
        if !self.is_complete() {
            return false;
        }
        self.level_order().all(|index| {
            let node = &self.nodes[index];
            node.children()
                .all(|child| self.nodes[child].element >= node.element)
        })
    }

    /// Whether every node's left child is not greater, and right child not smaller, than it.
    ///
    /// This only compares each node with its direct children. A grandchild can sit on the
    /// wrong side of its grandparent and still pass; see [`is_bst_strict`](Self::is_bst_strict)
    /// for the full ordering check. An empty tree does not pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(5).unwrap();
    /// tree.add_left(root, 3).unwrap();
    /// let right = tree.add_right(root, 8).unwrap();
    /// assert!(tree.is_bst());
    ///
    /// tree.replace(right, 2).unwrap();
    /// assert!(!tree.is_bst());
    /// ```
    pub fn is_bst(&self) -> bool
    where
        E: Ord,
    {
        if self.root.is_none() {
            return false;
        }
        self.level_order().all(|index| {
            let node = &self.nodes[index];
            let left_ok = node
                .left
                .map_or(true, |left| self.nodes[left].element <= node.element);
            let right_ok = node
                .right
                .map_or(true, |right| self.nodes[right].element >= node.element);
            left_ok && right_ok
        })
    }

    /// Whether every element of each node's left subtree is not greater than it, and every
    /// element of its right subtree is not smaller. An empty tree does not pass.
    pub fn is_bst_strict(&self) -> bool
    where
        E: Ord,
    {
        let Some(root) = self.root else {
            return false;
        };
        let mut stack: Vec<(Index, Option<&E>, Option<&E>)> = vec![(root, None, None)];
        while let Some((index, lower, upper)) = stack.pop() {
            let node = &self.nodes[index];
            let element = &node.element;
            if lower.is_some_and(|lower| element < lower)
                || upper.is_some_and(|upper| element > upper)
            {
                return false;
            }
            if let Some(left) = node.left {
                stack.push((left, lower, Some(element)));
            }
            if let Some(right) = node.right {
                stack.push((right, Some(element), upper));
            }
        }
        true
    }

    /// Whether the subtree heights of every node differ by at most one.
    /// An empty tree is balanced.
    pub fn is_avl(&self) -> bool {
        self.root.map_or(true, |root| {
            self.post_order_height(root, |left, right| left.abs_diff(right) <= 1)
                .is_some()
        })
    }
}

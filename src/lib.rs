//! This crate exposes a positional binary tree, mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is a set of `Node`s where every `Node` has at most two
//! children, a left one and a right one, and every `Node` except the root
//! has exactly one parent. Unlike a Binary Search Tree, nothing decides
//! *where* a value goes: the caller builds the shape explicitly by naming
//! the node to grow from.
//!
//! Nodes are named by [`Position`]s. A `Position` is handed out when a node
//! is created and stays valid until that node is removed. Using a stale
//! `Position`, or one that came from a different tree, is reported as
//! [`TreeError::InvalidPosition`] rather than touching the wrong node.
//!
//! > Note that a `Node` without children is called an "external" node (or
//! > "leaf") and a `Node` with at least one child an "internal" node.
//!
//! Besides building and navigating, the tree answers a few questions about
//! its shape and ordering: its height, whether it is complete, whether it is
//! ordered like a min-heap or a BST, and whether it is balanced like an AVL
//! tree. These are computed on demand by walking the tree.
//!
//! # Examples
//!
//! ```
//! use binary_tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.add_root(2).unwrap();
//! tree.add_left(root, 1).unwrap();
//! tree.add_right(root, 3).unwrap();
//!
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_complete());
//! assert!(tree.is_bst());
//! assert!(!tree.is_min_heap());
//! ```

#![deny(missing_docs)]

mod error;
mod node;
mod position;
mod queries;
mod tree;
mod util;

pub use error::TreeError;
pub use position::Position;
pub use tree::BinaryTree;
pub use util::Side;

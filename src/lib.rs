//! This crate exposes a Binary Search Tree (BST) over unique, totally ordered
//! values, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). Building a tree from the
//! median of its sorted values limits the height to `O(lg N)`, but this tree
//! does not balance itself: repeated inserts or deletes can skew it until
//! [`Tree::rebalance`] is called. BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree
//! (see [`Tree::in_order`]).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod render;
pub mod traverse;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use traverse::Traversal;
pub use tree::{Node, Scalar, Tree};

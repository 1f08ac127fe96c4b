//! An owned, unbalanced BST that is only rebalanced on request.
//!
//! Every node exclusively owns its two children through `Option<Box<_>>`, so
//! there are no parent pointers and nothing is shared. Construction always
//! produces a height-balanced tree by picking the median of the sorted values
//! as each subtree's root. After that, [`Tree::insert`] and [`Tree::remove`]
//! are free to skew the tree until [`Tree::rebalance`] rebuilds it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // A chain of ascending inserts leans the tree to the right.
//! for value in [100, 110, 120] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), [1, 3, 4, 5, 7, 8, 9, 100, 110, 120]);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{TreeError, TreeResult};

/// The values a [`Tree`] can hold: totally ordered, cheap to copy, and
/// printable for logging. Integers are the intended use.
pub trait Scalar: Ord + Copy + fmt::Debug {}

impl<T> Scalar for T where T: Ord + Copy + fmt::Debug {}

type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`Tree`]. A `Node` with neither child is a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding only smaller values.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding only larger values.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A
    /// leaf has a height of 0.
    pub fn height(&self) -> isize {
        1 + link_height(&self.left).max(link_height(&self.right))
    }

    /// Whether the heights of the two subtrees differ by at most one here and
    /// at every node below.
    pub fn is_balanced(&self) -> bool {
        (link_height(&self.left) - link_height(&self.right)).abs() <= 1
            && link_is_balanced(&self.left)
            && link_is_balanced(&self.right)
    }

    /// The smallest value in the subtree rooted here.
    fn min_value(&self) -> T
    where
        T: Copy,
    {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node.value
    }
}

/// An empty subtree has a height of -1.
fn link_height<T>(link: &Link<T>) -> isize {
    link.as_deref().map_or(-1, Node::height)
}

/// An empty subtree is balanced.
fn link_is_balanced<T>(link: &Link<T>) -> bool {
    link.as_deref().map_or(true, Node::is_balanced)
}

/// A Binary Search Tree of unique values. Values in a node's left subtree are
/// strictly smaller than its own and values in its right subtree are strictly
/// larger.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Tree<T> {
    /// Generates a new tree with no nodes.
    pub fn empty() -> Self {
        Self { root: None, len: 0 }
    }

    /// The top node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree. Use [`Node::height`] for a subtree.
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// assert_eq!(Tree::<i32>::empty().height(), -1);
    /// assert_eq!(Tree::new([1]).height(), 0);
    /// assert_eq!(Tree::new([1, 2, 3]).height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        link_height(&self.root)
    }

    /// Whether the whole tree is balanced. Use [`Node::is_balanced`] for a
    /// subtree. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        link_is_balanced(&self.root)
    }
}

impl<T: Scalar> Tree<T> {
    /// Builds a balanced tree from an arbitrary collection. Duplicates are
    /// dropped and the input order does not matter.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let unique: BTreeSet<T> = values.into_iter().collect();
        let sorted: Vec<T> = unique.into_iter().collect();
        let tree = Self {
            root: build_range(&sorted),
            len: sorted.len(),
        };
        debug!(len = tree.len, height = tree.height(), "built tree");
        tree
    }

    /// Adds `value` as a new leaf. Returns `false`, leaving the tree untouched,
    /// when the value is already present. The tree is never rebalanced here.
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new([2, 1, 3]);
    /// assert!(tree.insert(4));
    /// assert!(!tree.insert(4));
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(?value, "rejected duplicate insert");
                    return false;
                }
            };
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Removes the node holding `value`. Returns whether a node was removed;
    /// an absent value is a no-op.
    ///
    /// A node with two children takes the value of its in-order successor,
    /// which is then removed from the right subtree in its place.
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(7));
    /// assert!(!tree.remove(&5));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = remove_from(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
        } else {
            trace!(?value, "nothing to remove");
        }
        removed
    }

    /// Looks up the node holding `value`.
    ///
    /// An empty tree is reported as [`TreeError::EmptyTree`], which is not the
    /// same as `Ok(None)` for a value that simply isn't there.
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let tree = Tree::new([2, 1, 3]);
    /// assert_eq!(tree.find(&3).unwrap().map(|node| *node.value()), Some(3));
    /// assert!(tree.find(&42).unwrap().is_none());
    ///
    /// let empty = Tree::<i32>::empty();
    /// assert_eq!(empty.find(&3).unwrap_err(), TreeError::EmptyTree);
    /// ```
    pub fn find(&self, value: &T) -> TreeResult<Option<&Node<T>>> {
        let mut current = Some(self.root().ok_or(TreeError::EmptyTree)?);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Ok(Some(node)),
            };
        }
        Ok(None)
    }

    /// Whether `value` is stored in the tree. An empty tree contains nothing.
    pub fn contains(&self, value: &T) -> bool {
        matches!(self.find(value), Ok(Some(_)))
    }

    /// Number of edges between the root and `node`.
    ///
    /// `node` must be a node of this tree, usually obtained from
    /// [`Tree::find`] or a traversal. The search follows `node`'s value down
    /// from the root and compares nodes by identity, so a node from another
    /// tree is reported as [`TreeError::NodeNotInTree`] even when the values
    /// match.
    pub fn depth(&self, node: &Node<T>) -> TreeResult<usize> {
        let mut current = self.root().ok_or(TreeError::EmptyTree)?;
        let mut edges = 0;
        loop {
            if std::ptr::eq(current, node) {
                return Ok(edges);
            }
            let next = match node.value.cmp(&current.value) {
                Ordering::Less => current.left(),
                Ordering::Greater => current.right(),
                Ordering::Equal => None,
            };
            current = next.ok_or(TreeError::NodeNotInTree)?;
            edges += 1;
        }
    }

    /// Rebuilds the tree from its sorted values so that it has the smallest
    /// possible height. The old nodes are dropped.
    pub fn rebalance(&mut self) {
        let before = self.height();
        let values = self.in_order();
        self.root = build_range(&values);
        debug!(
            len = values.len(),
            before,
            after = self.height(),
            "rebalanced tree"
        );
    }
}

impl<T: Scalar> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Builds a subtree out of a sorted, duplicate free slice. The (lower) median
/// becomes the root so the two halves differ in size by at most one.
fn build_range<T: Copy>(sorted: &[T]) -> Link<T> {
    if sorted.is_empty() {
        return None;
    }

    let mid = (sorted.len() - 1) / 2;
    Some(Box::new(Node {
        value: sorted[mid],
        left: build_range(&sorted[..mid]),
        right: build_range(&sorted[mid + 1..]),
    }))
}

/// Removes `value` from the subtree in `link` and hands back the new root of
/// that subtree for the caller to reattach.
fn remove_from<T: Scalar>(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
    let mut node = link?;
    match value.cmp(&node.value) {
        Ordering::Less => node.left = remove_from(node.left.take(), value, removed),
        Ordering::Greater => node.right = remove_from(node.right.take(), value, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let successor = right.min_value();
                    node.value = successor;
                    node.left = Some(left);
                    node.right = remove_from(Some(right), &successor, &mut false);
                }
            }
        }
    }
    Some(node)
}

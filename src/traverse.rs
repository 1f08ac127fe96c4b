//! Depth-first and breadth-first walks over a [`Tree`].
//!
//! Each walk comes in two flavours: one hands every node to a visitor closure
//! and returns nothing, the other collects the visited values into a `Vec`.
//! Neither keeps any state between calls so they can be repeated freely.

use std::collections::VecDeque;

use crate::error::{TreeError, TreeResult};
use crate::tree::{Node, Tree};

/// The order in which a walk visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This yields
    /// values in ascending order.
    InOrder,
    /// Both subtrees, then the node.
    PostOrder,
    /// Level by level from the root, left to right within a level.
    LevelOrder,
}

impl<T> Tree<T> {
    /// Calls `visitor` on every node in the given order.
    ///
    /// Only [`Traversal::LevelOrder`] treats an empty tree as an error; the
    /// depth-first orders simply never call `visitor`.
    pub fn visit<F>(&self, order: Traversal, mut visitor: F) -> TreeResult<()>
    where
        F: FnMut(&Node<T>),
    {
        match order {
            Traversal::LevelOrder => {
                let root = self.root().ok_or(TreeError::EmptyTree)?;
                breadth_first(root, &mut visitor);
            }
            depth_first_order => depth_first(self.root(), depth_first_order, &mut visitor),
        }
        Ok(())
    }

    /// Collects the values in the given order.
    ///
    /// ```
    /// use ordered_tree::{Traversal, Tree};
    ///
    /// let tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(
    ///     tree.values(Traversal::LevelOrder).unwrap(),
    ///     [5, 3, 8, 1, 4, 7, 9]
    /// );
    /// assert_eq!(
    ///     tree.values(Traversal::PostOrder).unwrap(),
    ///     [1, 4, 3, 7, 9, 8, 5]
    /// );
    /// ```
    pub fn values(&self, order: Traversal) -> TreeResult<Vec<T>>
    where
        T: Copy,
    {
        let mut values = Vec::with_capacity(self.len());
        self.visit(order, |node| values.push(*node.value()))?;
        Ok(values)
    }

    /// Breadth-first walk handing each node to `visitor`.
    pub fn level_order_with<F>(&self, visitor: F) -> TreeResult<()>
    where
        F: FnMut(&Node<T>),
    {
        self.visit(Traversal::LevelOrder, visitor)
    }

    /// Values level by level, or [`TreeError::EmptyTree`].
    pub fn level_order(&self) -> TreeResult<Vec<T>>
    where
        T: Copy,
    {
        self.values(Traversal::LevelOrder)
    }

    /// Pre-order walk handing each node to `visitor`.
    pub fn pre_order_with<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.visit_depth_first(Traversal::PreOrder, visitor)
    }

    /// Values in pre-order. Empty for an empty tree.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.depth_first_values(Traversal::PreOrder)
    }

    /// In-order walk handing each node to `visitor`.
    pub fn in_order_with<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.visit_depth_first(Traversal::InOrder, visitor)
    }

    /// Values in ascending order. Empty for an empty tree.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.depth_first_values(Traversal::InOrder)
    }

    /// Post-order walk handing each node to `visitor`.
    pub fn post_order_with<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.visit_depth_first(Traversal::PostOrder, visitor)
    }

    /// Values in post-order. Empty for an empty tree.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.depth_first_values(Traversal::PostOrder)
    }

    fn visit_depth_first<F>(&self, order: Traversal, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        depth_first(self.root(), order, &mut visitor);
    }

    fn depth_first_values(&self, order: Traversal) -> Vec<T>
    where
        T: Copy,
    {
        let mut values = Vec::with_capacity(self.len());
        self.visit_depth_first(order, |node| values.push(*node.value()));
        values
    }
}

fn depth_first<T, F>(node: Option<&Node<T>>, order: Traversal, visitor: &mut F)
where
    F: FnMut(&Node<T>),
{
    let Some(node) = node else {
        return;
    };

    if order == Traversal::PreOrder {
        visitor(node);
    }
    depth_first(node.left(), order, visitor);
    if order == Traversal::InOrder {
        visitor(node);
    }
    depth_first(node.right(), order, visitor);
    if order == Traversal::PostOrder {
        visitor(node);
    }
}

fn breadth_first<T, F>(root: &Node<T>, visitor: &mut F)
where
    F: FnMut(&Node<T>),
{
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        visitor(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

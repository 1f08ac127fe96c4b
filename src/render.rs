//! Text rendering of a [`Tree`] for eyeballing its shape.
//!
//! The tree is drawn sideways: the right subtree above each node and the left
//! subtree below it, so the largest value ends up at the top.
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let tree = Tree::new([1, 2, 3]);
//! assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn render<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let guide = if is_left { "│   " } else { "    " };
        render(f, right, &format!("{prefix}{guide}"), false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let guide = if is_left { "    " } else { "│   " };
        render(f, left, &format!("{prefix}{guide}"), true)?;
    }
    Ok(())
}

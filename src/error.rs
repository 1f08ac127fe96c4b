//! Conditions a [`Tree`][crate::Tree] reports instead of panicking.
//!
//! "Not found" is deliberately absent here: a missing value is an ordinary
//! `Ok(None)` from [`find`][crate::Tree::find] and a `false` from
//! [`remove`][crate::Tree::remove].

use thiserror::Error;

/// Errors returned by tree queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no root, so there is nothing to search or walk.
    #[error("tree is empty")]
    EmptyTree,

    /// The node handed to [`depth`][crate::Tree::depth] is not reachable from
    /// the root along its search path.
    #[error("node is not part of this tree")]
    NodeNotInTree,
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;

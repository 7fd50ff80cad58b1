//! This crate exposes an unbalanced Binary Search Tree (BST) keyed by an
//! integer that each stored payload reports about itself, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a payload
//! and will sometimes have child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key. Equal keys are allowed and
//!    always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Nothing here rebalances the tree, so inserting
//! keys in sorted order produces a tree as tall as it is long. Every walk is
//! therefore iterative and never recurses on the shape of the tree.
//!
//! # Examples
//!
//! ```
//! use keytree::{Error, Tree};
//!
//! let mut tree: Tree<i32> = [50, 75, 57, 54, 25, 5, 15].into_iter().collect();
//!
//! let keys: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(keys, [5, 15, 25, 50, 54, 57, 75]);
//!
//! assert_eq!(tree.minimum(), Some(&5));
//! assert_eq!(tree.remove(57), Ok(Some(57)));
//! assert_eq!(tree.remove(57), Err(Error::NotFound { key: 57 }));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod keyed;
pub mod render;
mod tree;

pub use error::{Error, Result};
pub use keyed::Keyed;
pub use render::RenderOptions;
pub use tree::Tree;

//! A human readable picture of a tree's shape, for debugging. The tree is drawn on its side: the
//! right subtree above its parent, the left subtree below, and each key indented in proportion to
//! its depth. This isn't a serialization format and can't be parsed back.
//!
//! # Examples
//!
//! ```
//! use keytree::{RenderOptions, Tree};
//!
//! let tree: Tree<i32> = [50, 30, 70].into_iter().collect();
//!
//! assert_eq!(
//!     tree.render_with(&RenderOptions::default().with_indent(2)),
//!     "\n    70\n\n  50\n\n    30\n"
//! );
//! ```

use std::fmt;

use crate::keyed::Keyed;
use crate::tree::{Node, Tree};

/// Settings for [`Tree::render_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per level of depth. The root is already indented once.
    pub indent: usize,
}

impl RenderOptions {
    /// The indent used by [`Tree::render`] and by `Display`.
    pub const DEFAULT_INDENT: usize = 5;

    /// Returns these options with a different indent.
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Self::DEFAULT_INDENT,
        }
    }
}

/// A tree paired with the options to draw it with.
struct Rendered<'a, T> {
    tree: &'a Tree<T>,
    options: &'a RenderOptions,
}

impl<T: Keyed> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order: right subtree, node, left subtree.
        let mut pending: Vec<(&Node<T>, usize)> = Vec::new();
        push_right_spine(&mut pending, self.tree.root(), 1);
        while let Some((node, depth)) = pending.pop() {
            let width = self.options.indent * depth;
            writeln!(f)?;
            writeln!(f, "{:width$}{}", "", node.key())?;
            push_right_spine(&mut pending, node.left.as_deref(), depth + 1);
        }
        Ok(())
    }
}

fn push_right_spine<'a, T>(
    pending: &mut Vec<(&'a Node<T>, usize)>,
    mut node: Option<&'a Node<T>>,
    mut depth: usize,
) {
    while let Some(n) = node {
        pending.push((n, depth));
        node = n.right.as_deref();
        depth += 1;
    }
}

impl<T: Keyed> Tree<T> {
    /// Draws the tree with the default [`RenderOptions`]. An empty tree draws as `""`.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Draws the tree with the given options.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        Rendered {
            tree: self,
            options,
        }
        .to_string()
    }
}

impl<T: Keyed> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(
            &Rendered {
                tree: self,
                options: &RenderOptions::default(),
            },
            f,
        )
    }
}

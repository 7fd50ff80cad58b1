//! Borrowing iterators over a [`Tree`][crate::Tree]. Both keep their own stack of pending nodes
//! instead of recursing, so the depth of the tree only costs heap space.

use std::iter::FusedIterator;

use crate::tree::Node;

/// An iterator over a tree's payloads in ascending key order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    /// Nodes whose left subtrees have been (or are being) visited but which haven't been yielded
    /// yet. The next node to yield is on top.
    pending: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

/// An iterator over a tree's payloads that yields every node after all of its descendants: the
/// left subtree, then the right subtree, then the node.
///
/// Created by [`Tree::post_order_iter`][crate::Tree::post_order_iter].
pub struct PostOrder<'a, T> {
    /// Each entry is a node and whether its children have already been pushed.
    pending: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            pending: root.map(|n| (n, false)).into_iter().collect(),
        }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        loop {
            let (node, expanded) = self.pending.pop()?;
            if expanded {
                return Some(node);
            }

            // Pushed in reverse so the left subtree comes off the stack first.
            self.pending.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.pending.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.pending.push((left, false));
            }
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|n| &n.value)
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

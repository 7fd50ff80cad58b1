//! An unbalanced BST owning its nodes through `Box`es. Every operation is a
//! single walk down from the root; nodes carry no parent pointers so removal
//! works on the parent's link to the node instead.
//!
//! # Examples
//!
//! ```
//! use keytree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(1), None);
//!
//! tree.insert((1, "one"));
//! assert_eq!(tree.find(1), Some(&(1, "one")));
//!
//! // Inserting the same key again keeps both payloads.
//! tree.insert((1, "uno"));
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out the first one found and hands back its payload.
//! assert_eq!(tree.remove(1), Ok(Some((1, "one"))));
//! assert_eq!(tree.find(1), Some(&(1, "uno")));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{Iter, PostOrder};
use crate::keyed::Keyed;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T: Keyed> Node<T> {
    pub(crate) fn key(&self) -> i64 {
        self.value.key()
    }

    /// The side a search for `key` continues on. Ties go right.
    fn child(&self, key: i64) -> Option<&Self> {
        if key < self.key() {
            self.left.as_deref()
        } else {
            self.right.as_deref()
        }
    }

    fn child_mut(&mut self, key: i64) -> &mut Link<T> {
        if key < self.key() {
            &mut self.left
        } else {
            &mut self.right
        }
    }

    /// Unlinks the node held by `link`, repairing the tree below it, and returns its payload.
    /// Returns `None` if `link` is empty.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let mut removed = link.take()?;
        let key = removed.key();

        *link = match (removed.left.take(), removed.right.take()) {
            (None, None) => {
                debug!("removing leaf {key}");
                None
            }
            (None, Some(right)) => {
                debug!("removing {key}, promoting its right child {}", right.key());
                Some(right)
            }
            (Some(left), None) => {
                debug!("removing {key}, promoting its left child {}", left.key());
                Some(left)
            }
            (Some(left), Some(mut right)) => match Self::take_leftmost(&mut right.left) {
                Some(mut successor) => {
                    debug!("removing {key}, splicing in successor {}", successor.key());
                    successor.left = Some(left);
                    successor.right = Some(right);
                    Some(successor)
                }
                // The right child has nothing to its left so it is the successor. It keeps its
                // own right subtree and adopts the removed node's left one.
                None => {
                    debug!("removing {key}, splicing in its right child {}", right.key());
                    right.left = Some(left);
                    Some(right)
                }
            },
        };

        Some(removed.value)
    }

    /// Detaches the leftmost node of the subtree held by `link`, moving that node's right subtree
    /// into the gap. Returns `None` if `link` is empty.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<Box<Self>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

/// An unbalanced Binary Search Tree of payloads ordered by their [`Keyed::key`]. This can be used
/// for inserting, finding, and removing payloads, and for walking them in key order.
///
/// The tree isn't synchronized. To share one between threads wrap the whole tree in a single
/// `Mutex`.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach children before each node drops so a list-shaped tree doesn't drop recursively.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // Children are visited before their parent, so a parent's cloned subtrees are always on
        // top of `built`: right above left.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut nodes = PostOrder::new(self.root.as_deref());
        while let Some(node) = nodes.next_node() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self { root: built.pop() }
    }
}

/// Two trees are equal when they have the same shape and equal payloads in the same places.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut ours = PostOrder::new(self.root.as_deref());
        let mut theirs = PostOrder::new(other.root.as_deref());
        loop {
            match (ours.next_node(), theirs.next_node()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    let same = a.value == b.value
                        && a.left.is_some() == b.left.is_some()
                        && a.right.is_some() == b.right.is_some();
                    if !same {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the payloads in the tree. The count isn't stored so this walks every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Removes every payload.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterates over the payloads in ascending key order. Payloads with equal keys come out in
    /// the order they sit in the tree, which is insertion order until one of them is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let tree: Tree<u8> = [3, 1, 2].into_iter().collect();
    /// assert!(tree.iter().eq([1, 2, 3].iter()));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Iterates over the payloads with every child before its parent, left subtree first.
    pub fn post_order_iter(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Calls `f` on every payload in ascending key order.
    pub fn in_order(&self, f: impl FnMut(&T)) {
        self.iter().for_each(f);
    }

    /// Calls `f` on every payload after it has been called on all of that payload's descendants
    /// (left subtree, right subtree, then the node itself).
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut seen = Vec::new();
    /// tree.post_order(|x| seen.push(*x));
    ///
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn post_order(&self, f: impl FnMut(&T)) {
        self.post_order_iter().for_each(f);
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Keyed> Tree<T> {
    /// Inserts the payload into the tree. A payload whose key is already present is placed in
    /// the right subtree of the existing one, so both are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let key = value.key();
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = node.child_mut(key);
        }

        trace!("attaching {key}");
        *link = Some(Node::new_boxed(value));
    }

    /// Potentially finds the payload with the given key. If no node has the key, `None` is
    /// returned. With duplicate keys this is the one closest to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert((1, 2));
    ///
    /// assert_eq!(tree.find(1), Some(&(1, 2)));
    /// assert_eq!(tree.find(42), None);
    /// ```
    pub fn find(&self, key: i64) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.key() == key {
                return Some(&node.value);
            }
            current = node.child(key);
        }
        None
    }

    /// Returns `true` if some payload has the given key.
    pub fn contains(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// The payload with the smallest key, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    /// The payload with the largest key, or `None` for an empty tree. With duplicate keys this is
    /// the one inserted last.
    pub fn maximum(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.value)
    }

    /// Removes the payload with the given key and returns it. With duplicate keys only the one
    /// closest to the root is removed.
    ///
    /// A node with two children is replaced by its in-order successor, the leftmost node of its
    /// right subtree.
    ///
    /// Removing from an empty tree does nothing and returns `Ok(None)`. Removing a key that a
    /// non-empty tree doesn't hold is an [`Error::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.remove(1), Ok(None));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.remove(2), Err(Error::NotFound { key: 2 }));
    /// assert_eq!(tree.remove(1), Ok(Some(1)));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: i64) -> Result<Option<T>> {
        if self.is_empty() {
            trace!("removing {key} from an empty tree");
            return Ok(None);
        }

        let mut link = &mut self.root;
        while link.as_deref().is_some_and(|node| node.key() != key) {
            if let Some(node) = link {
                link = node.child_mut(key);
            }
        }

        Node::unlink(link).map(Some).ok_or(Error::NotFound { key })
    }
}

impl<T: Keyed> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Keyed> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

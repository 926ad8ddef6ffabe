//! A persistent AVL tree. This is modeled after a tree one would see in
//! a functional language like Haskell. Any operations that one would
//! expect to modify the tree (e.g. `insert` or `remove`) instead return
//! a new tree that references many of the nodes of the original tree.
//!
//! # Examples
//!
//! ```
//! use persistent_avl::Tree;
//!
//! let tree = Tree::new(5);
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(4);
//!
//! // The new tree has this new value but the old one doesn't.
//! assert!(new_tree.contains(&4));
//! assert!(!tree.contains(&4));
//!
//! // Removing can empty a tree, so the result is a `Nullable`.
//! let newer_tree = new_tree.remove(&5);
//! let newest_tree = newer_tree.remove(&4);
//!
//! // All history is preserved.
//! assert!(newest_tree.is_empty());
//! assert_eq!(newer_tree.to_list(), vec![4]);
//! assert_eq!(new_tree.to_list(), vec![4, 5]);
//! assert_eq!(tree.to_list(), vec![5]);
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use log::trace;

use crate::Nullable;

/// A node of an AVL tree, and the tree rooted at it.
///
/// Values act as their own keys. Values equal to a node's value are inserted
/// into its right subtree, so duplicates are kept. Every field is fixed at
/// construction: `size` and `height` are cached then and never recomputed.
#[derive(Debug)]
pub struct Tree<T> {
    value: Arc<T>,
    left: Nullable<Tree<T>>,
    right: Nullable<Tree<T>>,

    /// How many values are in the subtree rooted at this node.
    size: usize,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Manual implementation of `Clone` so we don't clone values when `T` isn't `Clone` itself.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
            size: self.size,
            height: self.height,
        }
    }
}

impl<T> Tree<T> {
    /// Constructs a single-element tree.
    pub fn new(value: T) -> Self {
        Self::with_children(Arc::new(value), Nullable::empty(), Nullable::empty())
    }

    /// Builds a node from its final parts, caching its size and height.
    fn with_children(value: Arc<T>, left: Nullable<Self>, right: Nullable<Self>) -> Self {
        Self {
            size: 1 + left.size() + right.size(),
            height: 1 + left.height().max(right.height()),
            value,
            left,
            right,
        }
    }

    /// Create a new, balanced node with the same value as this node
    /// but with the given children.
    fn clone_with_children(&self, left: Nullable<Self>, right: Nullable<Self>) -> Self {
        Self::with_children(Arc::clone(&self.value), left, right).balance()
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree holding values not greater than [`value`][Self::value].
    pub fn left(&self) -> &Nullable<Self> {
        &self.left
    }

    /// The subtree holding values not less than [`value`][Self::value].
    pub fn right(&self) -> &Nullable<Self> {
        &self.right
    }

    /// Number of values in the tree, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of levels in the tree. A single-element tree has a height of 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.as_option() {
            node = left;
        }
        &node.value
    }

    /// The largest value in the tree.
    pub fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right.as_option() {
            node = right;
        }
        &node.value
    }

    /// Checks the AVL invariant at every node, recomputing heights from scratch
    /// instead of trusting the cached ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_avl::Tree;
    ///
    /// let tree = (1..10).fold(Tree::new(0), |tree, x| tree.insert(x));
    ///
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.measured_height().is_some()
    }

    /// The recomputed height of this subtree, or `None` if some node in it is unbalanced.
    fn measured_height(&self) -> Option<usize> {
        let left = self.left.as_option().map_or(Some(0), Self::measured_height)?;
        let right = self.right.as_option().map_or(Some(0), Self::measured_height)?;
        if left.abs_diff(right) <= 1 {
            Some(1 + left.max(right))
        } else {
            None
        }
    }

    /// Returns `true` if some value in the tree is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match (*self.value).cmp(value) {
            Ordering::Equal => true,
            Ordering::Greater => self.left.contains(value),
            Ordering::Less => self.right.contains(value),
        }
    }

    /// Returns a new tree that also holds `value`. The size always grows by
    /// exactly one; a value equal to an existing one is placed to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_avl::Tree;
    ///
    /// let tree = Tree::new(1);
    /// let new_tree = tree.insert(1);
    ///
    /// assert_eq!(new_tree.size(), 2);
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: Ord,
    {
        if value < *self.value {
            let new_left = self.left.insert(value);
            self.clone_with_children(Nullable::new(new_left), self.right.clone())
        } else {
            let new_right = self.right.insert(value);
            self.clone_with_children(self.left.clone(), Nullable::new(new_right))
        }
    }

    /// Returns a new tree with one value equal to `value` removed. The result is
    /// empty only if this was the last value. Removing a value that isn't in the
    /// tree gives back this same tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_avl::Tree;
    ///
    /// let tree = Tree::new(1).insert(2);
    ///
    /// assert_eq!(tree.remove(&1).size(), 1);
    /// assert_eq!(tree.remove(&3).size(), 2);
    /// assert!(tree.remove(&1).remove(&2).is_empty());
    /// ```
    pub fn remove(&self, value: &T) -> Nullable<Self>
    where
        T: Ord,
    {
        self.delete(value).unwrap_or_else(|| {
            trace!("value to remove not found, tree of size {} unchanged", self.size);
            Nullable::new(self.clone())
        })
    }

    /// Removes `value` from this subtree. `None` means it wasn't found, so no
    /// ancestor needs rebuilding.
    fn delete(&self, value: &T) -> Option<Nullable<Self>>
    where
        T: Ord,
    {
        match (*self.value).cmp(value) {
            Ordering::Equal => Some(self.delete_self()),
            Ordering::Greater => {
                let new_left = self.left.as_option()?.delete(value)?;
                Some(Nullable::new(
                    self.clone_with_children(new_left, self.right.clone()),
                ))
            }
            Ordering::Less => {
                let new_right = self.right.as_option()?.delete(value)?;
                Some(Nullable::new(
                    self.clone_with_children(self.left.clone(), new_right),
                ))
            }
        }
    }

    /// Removes this node's own value, promoting its predecessor (or, without a left
    /// child, its successor) to take its place.
    fn delete_self(&self) -> Nullable<Self> {
        match (self.left.as_option(), self.right.as_option()) {
            (None, None) => Nullable::empty(),
            (Some(left), _) => {
                let (pred, new_left) = left.pop_max();
                Nullable::new(Self::with_children(pred, new_left, self.right.clone()).balance())
            }
            (None, Some(right)) => {
                let (succ, new_right) = right.pop_min();
                Nullable::new(Self::with_children(succ, self.left.clone(), new_right).balance())
            }
        }
    }

    /// Returns the smallest value and a new subtree without it.
    fn pop_min(&self) -> (Arc<T>, Nullable<Self>) {
        match self.left.as_option() {
            None => (Arc::clone(&self.value), self.right.clone()),
            Some(left) => {
                let (min, new_left) = left.pop_min();
                (
                    min,
                    Nullable::new(self.clone_with_children(new_left, self.right.clone())),
                )
            }
        }
    }

    /// Returns the largest value and a new subtree without it.
    fn pop_max(&self) -> (Arc<T>, Nullable<Self>) {
        match self.right.as_option() {
            None => (Arc::clone(&self.value), self.left.clone()),
            Some(right) => {
                let (max, new_right) = right.pop_max();
                (
                    max,
                    Nullable::new(self.clone_with_children(self.left.clone(), new_right)),
                )
            }
        }
    }

    /// Returns a new tree by rotating the right child up to become the root. To maintain the AVL
    /// invariant, we lift the right child's left child to be the new left child's right child.
    ///
    /// Without a right child there is nothing to rotate and the tree is returned unchanged.
    fn rotate_left(&self) -> Self {
        match self.right.as_option() {
            None => self.clone(),
            Some(pivot) => {
                let new_left =
                    Self::with_children(Arc::clone(&self.value), self.left.clone(), pivot.left.clone());
                Self::with_children(
                    Arc::clone(&pivot.value),
                    Nullable::new(new_left),
                    pivot.right.clone(),
                )
            }
        }
    }

    /// Returns a new tree by rotating the left child up to become the root. To maintain the AVL
    /// invariant, we lift the left child's right child to be the new right child's left child.
    ///
    /// Without a left child there is nothing to rotate and the tree is returned unchanged.
    fn rotate_right(&self) -> Self {
        match self.left.as_option() {
            None => self.clone(),
            Some(pivot) => {
                let new_right = Self::with_children(
                    Arc::clone(&self.value),
                    pivot.right.clone(),
                    self.right.clone(),
                );
                Self::with_children(
                    Arc::clone(&pivot.value),
                    pivot.left.clone(),
                    Nullable::new(new_right),
                )
            }
        }
    }

    /// Balances a tree using the heights of the children.
    ///
    /// A single rotation only fixes a child that is taller on its outer side. When the taller
    /// child leans inward it is rotated outward first.
    ///
    /// **Note** This takes `self` instead of `&self` so an already balanced node is returned
    /// without another round of reference count updates.
    fn balance(self) -> Self {
        let left_height = self.left.height();
        let right_height = self.right.height();

        let return_node = if left_height > right_height + 1 {
            trace!(
                "rotating right: left height {}, right height {}",
                left_height,
                right_height
            );
            let node = match self.left.as_option() {
                Some(left) if left.right.height() > left.left.height() => Self::with_children(
                    Arc::clone(&self.value),
                    Nullable::new(left.rotate_left()),
                    self.right.clone(),
                ),
                _ => self,
            };
            node.rotate_right()
        } else if right_height > left_height + 1 {
            trace!(
                "rotating left: left height {}, right height {}",
                left_height,
                right_height
            );
            let node = match self.right.as_option() {
                Some(right) if right.left.height() > right.right.height() => Self::with_children(
                    Arc::clone(&self.value),
                    self.left.clone(),
                    Nullable::new(right.rotate_right()),
                ),
                _ => self,
            };
            node.rotate_left()
        } else {
            self
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            let right_height = return_node.right.height();
            let left_height = return_node.left.height();
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        return_node
    }
}

/// Operations on a whole tree that may be empty, such as the result of [`Tree::remove`].
impl<T> Nullable<Tree<T>> {
    /// Number of values in the tree; 0 when empty.
    pub fn size(&self) -> usize {
        self.as_option().map_or(0, Tree::size)
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.as_option().map_or(0, Tree::height)
    }

    /// Returns `true` if some value in the tree is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.as_option().map_or(false, |tree| tree.contains(value))
    }

    /// Returns a new tree that also holds `value`. Inserting into an empty
    /// container gives a single-element tree.
    pub fn insert(&self, value: T) -> Tree<T>
    where
        T: Ord,
    {
        match self.as_option() {
            None => Tree::new(value),
            Some(tree) => tree.insert(value),
        }
    }

    /// Returns a new container without one value equal to `value`. The tree is
    /// shared, not rebuilt, when `value` isn't present.
    pub fn remove(&self, value: &T) -> Self
    where
        T: Ord,
    {
        self.as_option()
            .and_then(|tree| tree.delete(value))
            .unwrap_or_else(|| self.clone())
    }
}

/// Builds a tree by inserting every value in turn.
///
/// ```
/// use persistent_avl::{Nullable, Tree};
///
/// let tree: Nullable<Tree<i32>> = vec![3, 1, 2].into_iter().collect();
///
/// assert_eq!(tree.to_list(), vec![1, 2, 3]);
/// ```
impl<T> FromIterator<T> for Nullable<Tree<T>>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Nullable::empty(), |tree, value| Nullable::new(tree.insert(value)))
    }
}

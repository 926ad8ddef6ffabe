//! In-order traversal of a [`Tree`].
//!
//! [`Iter`] is a cursor over logical indices. Each step re-descends from the
//! root using the cached subtree sizes, so a step costs `O(height)` and a full
//! traversal `O(n * height)`. [`Tree::to_list`] materializes the whole sequence
//! in a single `O(n)` walk instead.

use std::iter::FusedIterator;
use std::ptr;

use crate::{Nullable, Tree};

impl<T> Tree<T> {
    /// Returns the value at `index` in ascending order, or `None` if `index` is
    /// past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_avl::Tree;
    ///
    /// let tree = Tree::new(5).insert(4).insert(7);
    ///
    /// assert_eq!(tree.get(0), Some(&4));
    /// assert_eq!(tree.get(2), Some(&7));
    /// assert_eq!(tree.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut node = self;
        let mut index = index;
        loop {
            let left_size = node.left().size();
            if index < left_size {
                node = node.left().as_option()?;
            } else if index == left_size {
                return Some(node.value());
            } else {
                index -= left_size + 1;
                node = node.right().as_option()?;
            }
        }
    }

    /// Every value in ascending order.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut list = Vec::with_capacity(self.size());
        self.collect_into(&mut list);
        list
    }

    fn collect_into(&self, list: &mut Vec<T>)
    where
        T: Clone,
    {
        if let Some(left) = self.left().as_option() {
            left.collect_into(list);
        }
        list.push(self.value().clone());
        if let Some(right) = self.right().as_option() {
            right.collect_into(list);
        }
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_avl::Tree;
    ///
    /// let tree = Tree::new(5).insert(4).insert(7).insert(10).insert(0);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![0, 4, 5, 7, 10]);
    /// assert_eq!(tree.iter().rev().next(), Some(&10));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: Some(self),
            front: 0,
            back: self.size(),
        }
    }
}

impl<T> Nullable<Tree<T>> {
    /// Every value in ascending order; nothing when empty.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_option().map_or_else(Vec::new, Tree::to_list)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self.as_option(),
            front: 0,
            back: self.size(),
        }
    }
}

/// Two trees are equal when they hold the same values in the same order,
/// whatever their shape.
///
/// ```
/// use persistent_avl::Tree;
///
/// let a = Tree::new(1).insert(2).insert(3);
/// let b = Tree::new(3).insert(2).insert(1);
///
/// assert_eq!(a, b);
/// assert_ne!(a, b.insert(4));
/// ```
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a Nullable<Tree<T>> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ascending iterator over a [`Tree`], addressed by index.
///
/// Two iterators are equal if they walk the same tree instance and are at the
/// same position.
#[derive(Debug)]
pub struct Iter<'a, T> {
    tree: Option<&'a Tree<T>>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    /// The index of the value the next call to `next` returns.
    pub fn position(&self) -> usize {
        self.front
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> PartialEq for Iter<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        let same_tree = match (self.tree, other.tree) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_tree && self.front == other.front
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.tree?.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.tree?.get(self.back)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

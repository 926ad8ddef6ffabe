//! A container holding zero or one shared value.
//!
//! Every child link in a [`Tree`][crate::Tree] is a `Nullable`, which makes
//! "no child" and "child shared with other trees" explicit states. Cloning a
//! `Nullable` never clones the value, it only shares it.
//!
//! # Examples
//!
//! ```
//! use persistent_avl::{Error, Nullable};
//!
//! let some = Nullable::new(5);
//! assert!(some.is_holding());
//! assert_eq!(**some.get().unwrap(), 5);
//!
//! let none: Nullable<i32> = Nullable::empty();
//! assert!(none.is_empty());
//! assert_eq!(none.get().unwrap_err(), Error::DereferenceOfEmpty);
//! ```

use std::sync::Arc;

use crate::{Error, Result};

/// Either nothing, or a value whose ownership is shared with every other
/// `Nullable` cloned from the same construction.
#[derive(Debug, PartialEq, Eq)]
pub enum Nullable<T> {
    /// Holds no value.
    Empty,
    /// Holds a shared, immutable value.
    Holds(Arc<T>),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Manual implementation of `Clone` so that `T` doesn't have to be `Clone`. Only the reference
/// count changes.
impl<T> Clone for Nullable<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Holds(value) => Self::Holds(Arc::clone(value)),
        }
    }
}

impl<T> From<Arc<T>> for Nullable<T> {
    fn from(value: Arc<T>) -> Self {
        Self::Holds(value)
    }
}

impl<T> From<Option<Arc<T>>> for Nullable<T> {
    fn from(value: Option<Arc<T>>) -> Self {
        value.map_or(Self::Empty, Self::Holds)
    }
}

impl<T> Nullable<T> {
    /// Creates a container that holds nothing.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Wraps a bare value. The container becomes its first owner.
    pub fn new(value: T) -> Self {
        Self::Holds(Arc::new(value))
    }

    /// Shares an already-shared value with this new container.
    pub fn shared(value: Arc<T>) -> Self {
        Self::Holds(value)
    }

    /// Returns `true` if a value is held.
    pub fn is_holding(&self) -> bool {
        matches!(self, Self::Holds(_))
    }

    /// Returns `true` if no value is held.
    pub fn is_empty(&self) -> bool {
        !self.is_holding()
    }

    /// Returns the shared handle of the held value.
    ///
    /// # Errors
    ///
    /// [`Error::DereferenceOfEmpty`] if nothing is held.
    pub fn get(&self) -> Result<&Arc<T>> {
        match self {
            Self::Empty => Err(Error::DereferenceOfEmpty),
            Self::Holds(value) => Ok(value),
        }
    }

    /// Borrows the held value, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Holds(value) => Some(&**value),
        }
    }

    /// Returns `true` if both containers share the same allocation, or are both empty.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Holds(a), Self::Holds(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding() {
        let n = Nullable::new(5);
        let copy = n.clone();

        assert!(copy.is_holding());
        assert!(!copy.is_empty());
        assert!(n.ptr_eq(&copy));
        assert_eq!(copy.as_option(), Some(&5));
    }

    #[test]
    fn empty() {
        let n: Nullable<i32> = Nullable::default();

        assert!(n.is_empty());
        assert!(!n.is_holding());
        assert_eq!(n.as_option(), None);
    }

    #[test]
    fn get_of_empty_fails() {
        let n: Nullable<i32> = Nullable::empty();

        assert_eq!(n.get().unwrap_err(), Error::DereferenceOfEmpty);
    }

    #[test]
    fn shared_handle_is_not_copied() {
        let value = Arc::new(String::from("shared"));
        let a = Nullable::shared(Arc::clone(&value));
        let b = Nullable::from(Arc::clone(&value));

        assert_eq!(Arc::strong_count(&value), 3);
        assert!(Arc::ptr_eq(a.get().unwrap(), b.get().unwrap()));

        drop(a);
        drop(b);
        assert_eq!(Arc::strong_count(&value), 1);
    }

    #[test]
    fn equality_compares_contents() {
        assert_eq!(Nullable::new(1), Nullable::new(1));
        assert_ne!(Nullable::new(1), Nullable::new(2));
        assert_ne!(Nullable::new(1), Nullable::empty());
        assert_eq!(Nullable::<i32>::from(None), Nullable::empty());
    }
}

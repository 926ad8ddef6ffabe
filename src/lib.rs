//! This crate exposes a persistent, self-balancing Binary Search Tree (an
//! AVL tree) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value not greater than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value not less than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). An AVL tree keeps the heights of
//! every `Node`'s two subtrees within one of each other, which limits the height
//! to `O(lg N)` where `N` is the number of nodes in the tree. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! ## Persistence
//!
//! A [`Tree`] is never modified. [`Tree::insert`] and [`Tree::remove`] build new
//! nodes along the path they change and share every other subtree with the tree
//! they started from, so old versions stay valid. Subtrees are reference counted
//! with [`Arc`][std::sync::Arc], so versions can be read from several threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod nullable;
mod tree;

pub use error::{Error, Result};
pub use iter::Iter;
pub use nullable::Nullable;
pub use tree::Tree;

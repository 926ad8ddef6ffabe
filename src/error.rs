//! Errors produced by this crate.

/// The ways an operation on a tree or container can fail.
///
/// Every other boundary condition (removing an absent value, inserting a
/// duplicate) is a defined result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Tried to read the value out of an empty [`Nullable`][crate::Nullable].
    #[error("dereference of empty container")]
    DereferenceOfEmpty,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//! Errors returned by [`Tree`][crate::Tree] operations.

/// Errors triggered by tree operations.
///
/// Lookups (`find`, `minimum`, `maximum`) never error: absence is an
/// ordinary outcome and is reported through `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A removal was requested on a non-empty tree for a key it doesn't hold.
    #[error("cannot find element by key {key}")]
    NotFound {
        /// The key that was looked for.
        key: i64,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

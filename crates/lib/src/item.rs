//! Item identity for by-key operations.
//!
//! This module defines the [`Keyed`] trait, the one structural requirement the
//! engine places on items: each item can produce the key it is identified by.

use std::fmt::Debug;

/// Types that carry their own identity.
///
/// By-key operations locate items through value equality on the key this
/// trait exposes. Which field (or derived value) serves as the key is fixed
/// per item type; to match the same record shape on a different field, wrap
/// it in a newtype with its own `Keyed` impl.
///
/// Keys are returned by value so commands can carry them as plain data, and
/// they are expected to be small: numbers, short strings, ids. Keys are not
/// required to be unique; operations that match by key take the leftmost
/// match.
///
/// # Examples
///
/// ```
/// use roster::Keyed;
///
/// #[derive(Clone)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl Keyed for User {
///     type Key = u64;
///     fn key(&self) -> u64 {
///         self.id
///     }
/// }
///
/// let user = User { id: 7, name: "ada".into() };
/// assert_eq!(user.key(), 7);
/// ```
pub trait Keyed {
    /// The key type items of this type are identified by.
    type Key: Clone + PartialEq + Debug;

    /// This item's identifying key.
    fn key(&self) -> Self::Key;
}

//! Pure list operations.
//!
//! Every function here maps a [`Collection`] to a new `Collection`, leaving
//! the input untouched. Unchanged elements are shared between the two
//! versions, so the cost of an operation is proportional to the spine copy,
//! not to cloning the items themselves.
//!
//! The lenient operations never fail. Conditions a caller might consider
//! errors degrade to no-ops that return the input unchanged:
//!
//! * removing or updating at an out-of-range index
//! * removing or updating by a key no item has
//!
//! Inserting is the one exception to positional strictness: an index past
//! the end clamps to an append instead of no-op'ing, so "insert at the back"
//! does not require knowing the current length.
//!
//! For callers that treat a bad index as a bug, the `try_` variants surface
//! [`OpsError`] instead of degrading.
//!
//! Operations matching by key take the leftmost match and touch nothing
//! else; duplicate keys further right survive untouched.

use std::sync::Arc;

use crate::{Collection, Keyed};

mod errors;
pub use errors::OpsError;


/// Inserts `item` so that it occupies `index`; later items shift one slot
/// toward the back.
///
/// An `index` past the end clamps to the current length, turning the insert
/// into an append. The result is always one item longer than the input.
///
/// # Examples
///
/// ```
/// use roster::{collection, ops};
///
/// let state = collection![1, 2, 3];
/// let next = ops::insert_item(&state, 99, 10);
/// assert_eq!(next.to_vec(), vec![1, 2, 3, 99]);
/// assert_eq!(state.len(), 3);
/// ```
pub fn insert_item<T>(collection: &Collection<T>, item: T, index: usize) -> Collection<T> {
    let mut items = collection.shared().to_vec();
    let index = index.min(items.len());
    items.insert(index, Arc::new(item));
    Collection::from_shared(items)
}

/// Removes the item at `index`, shifting later items one slot toward the
/// front.
///
/// An out-of-range `index` is a no-op.
pub fn remove_item<T>(collection: &Collection<T>, index: usize) -> Collection<T> {
    if index >= collection.len() {
        return collection.clone();
    }
    let mut items = collection.shared().to_vec();
    items.remove(index);
    Collection::from_shared(items)
}

/// Removes the leftmost item whose key equals `key`.
///
/// Items further right keep their relative order, including any that share
/// the same key. A key no item has is a no-op.
pub fn remove_item_by_key<T: Keyed>(collection: &Collection<T>, key: &T::Key) -> Collection<T> {
    match collection.iter().position(|item| item.key() == *key) {
        Some(index) => remove_item(collection, index),
        None => collection.clone(),
    }
}

/// Replaces the item at `index` with `item`.
///
/// The collection's length never changes: an out-of-range `index` is a
/// no-op, not an insert.
pub fn update_item<T>(collection: &Collection<T>, item: T, index: usize) -> Collection<T> {
    if index >= collection.len() {
        return collection.clone();
    }
    let mut items = collection.shared().to_vec();
    items[index] = Arc::new(item);
    Collection::from_shared(items)
}

/// Replaces the leftmost item sharing `item`'s key with `item`, keeping its
/// position.
///
/// If no item matches, nothing is inserted and the input comes back
/// unchanged.
///
/// # Examples
///
/// ```
/// use roster::{Keyed, collection, ops};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tag(u32, &'static str);
///
/// impl Keyed for Tag {
///     type Key = u32;
///     fn key(&self) -> u32 {
///         self.0
///     }
/// }
///
/// let state = collection![Tag(1, "draft"), Tag(2, "urgent")];
/// let next = ops::update_item_by_key(&state, Tag(2, "done"));
/// assert_eq!(next.get(1), Some(&Tag(2, "done")));
/// ```
pub fn update_item_by_key<T: Keyed>(collection: &Collection<T>, item: T) -> Collection<T> {
    let key = item.key();
    match collection.iter().position(|existing| existing.key() == key) {
        Some(index) => update_item(collection, item, index),
        None => collection.clone(),
    }
}

/// Replaces every item whose key matches one of `items`, keeping positions.
///
/// Each element of the collection is compared against the batch in order and
/// replaced by the first batch item sharing its key; elements with no match
/// pass through shared, not cloned. Batch items matching nothing are
/// dropped, and an empty batch returns the input unchanged.
pub fn update_items_by_key<T: Keyed + Clone>(
    collection: &Collection<T>,
    items: &[T],
) -> Collection<T> {
    if items.is_empty() {
        return collection.clone();
    }
    let replaced = collection
        .shared()
        .iter()
        .map(|existing| {
            let key = existing.key();
            match items.iter().find(|candidate| candidate.key() == key) {
                Some(replacement) => Arc::new(replacement.clone()),
                None => Arc::clone(existing),
            }
        })
        .collect();
    Collection::from_shared(replaced)
}

/// Strict [`insert_item`]: rejects an `index` past the end instead of
/// clamping.
///
/// `index == len` is still a valid append.
pub fn try_insert_item<T>(
    collection: &Collection<T>,
    item: T,
    index: usize,
) -> Result<Collection<T>, OpsError> {
    let len = collection.len();
    if index > len {
        return Err(OpsError::IndexOutOfBounds { index, len });
    }
    Ok(insert_item(collection, item, index))
}

/// Strict [`remove_item`]: rejects an out-of-range `index` instead of
/// no-op'ing.
pub fn try_remove_item<T>(
    collection: &Collection<T>,
    index: usize,
) -> Result<Collection<T>, OpsError> {
    let len = collection.len();
    if index >= len {
        return Err(OpsError::IndexOutOfBounds { index, len });
    }
    Ok(remove_item(collection, index))
}

/// Strict [`update_item`]: rejects an out-of-range `index` instead of
/// no-op'ing.
pub fn try_update_item<T>(
    collection: &Collection<T>,
    item: T,
    index: usize,
) -> Result<Collection<T>, OpsError> {
    let len = collection.len();
    if index >= len {
        return Err(OpsError::IndexOutOfBounds { index, len });
    }
    Ok(update_item(collection, item, index))
}

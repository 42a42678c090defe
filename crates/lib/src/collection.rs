//! Ordered, immutable collections of items.
//!
//! [`Collection`] is the state type every list operation consumes and
//! produces. Operations never modify a collection in place; they build a new
//! one that shares unchanged elements with its predecessor, so holding on to
//! old versions (snapshots, undo stacks, devtools) costs one pointer per
//! element rather than a deep copy.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// An ordered, immutable sequence of items.
///
/// `Collection` is a value type: the transition engine takes a collection by
/// reference and returns a fresh one, leaving the input untouched. To make
/// that affordable, elements live behind [`Arc`] handles. Deriving a new
/// collection copies the spine (one pointer per element) and shares every
/// element that did not change, so cloning never requires `T: Clone`.
///
/// Elements are immutable once stored; the API hands out shared references
/// only.
///
/// # Examples
///
/// ```
/// use roster::Collection;
///
/// let items: Collection<&str> = ["a", "b", "c"].into_iter().collect();
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.get(1), Some(&"b"));
/// ```
#[derive(PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<Arc<T>>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the item at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|item| item.as_ref())
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Copies the items out into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Wraps an already-shared element spine.
    pub(crate) fn from_shared(items: Vec<Arc<T>>) -> Self {
        Self { items }
    }

    /// The shared element spine, for operations that rebuild it.
    pub(crate) fn shared(&self) -> &[Arc<T>] {
        &self.items
    }
}

// Manual impls where a derive would demand `T: Clone` or `T: Default`
// the container itself does not need.

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

// Collections serialize as a bare sequence, indistinguishable on the wire
// from the plain array producers in other languages emit.

impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Collection<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CollectionVisitor<T>(PhantomData<T>);

        impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for CollectionVisitor<T> {
            type Value = Collection<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of items")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<T>()? {
                    items.push(Arc::new(item));
                }
                Ok(Collection { items })
            }
        }

        deserializer.deserialize_seq(CollectionVisitor(PhantomData))
    }
}

/// Creates a [`Collection`] from a list of items, `vec!`-style.
///
/// # Examples
///
/// ```
/// use roster::collection;
///
/// let tags = collection!["a", "b", "c"];
/// assert_eq!(tags.len(), 3);
/// assert_eq!(tags.get(0), Some(&"a"));
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from(vec![$($item),+])
    };
}

//! Commands: the discrete instructions a reducer consumes.
//!
//! A [`Command`] is a plain data record pairing an operation ([`Op`]) with
//! advisory [`CommandMeta`] and an `error` flag for failure notifications.
//! Commands serialize to the `{kind, payload, metadata, error}` wire shape
//! shared across the state layer, with SCREAMING_SNAKE_CASE kind strings
//! (`"INSERT_ITEM"`, `"RESET_LIST"`, ...), so logs produced elsewhere replay
//! here unchanged.

use serde::{Deserialize, Serialize};

use crate::{Collection, Keyed};

/// A list operation and its payload.
///
/// One variant per command kind. The enum is `#[non_exhaustive]`: kinds
/// added in later versions must degrade to identity transitions in older
/// reducers, never to failures.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    bound(
        serialize = "T: Serialize, T::Key: Serialize",
        deserialize = "T: Deserialize<'de>, T::Key: Deserialize<'de>"
    )
)]
pub enum Op<T: Keyed> {
    /// Insert `item` so it occupies `index`; later items shift back.
    InsertItem {
        /// The item to insert
        item: T,
        /// Target position; past-the-end clamps to an append
        index: usize,
    },
    /// Remove the item at `index`.
    RemoveItem {
        /// Position to remove; out of range is a no-op
        index: usize,
    },
    /// Remove the leftmost item whose key equals `key`.
    RemoveItemByKey {
        /// Key to match
        key: T::Key,
    },
    /// Replace the item at `index` with `item`.
    UpdateItem {
        /// The replacement item
        item: T,
        /// Position to replace; out of range is a no-op
        index: usize,
    },
    /// Replace the leftmost item sharing `item`'s key, keeping its position.
    UpdateItemByKey {
        /// The replacement item, which carries the key to match
        item: T,
    },
    /// Replace every item whose key matches one of `items`, keeping
    /// positions.
    UpdateItemsByKey {
        /// Replacement items; unmatched ones are dropped
        items: Vec<T>,
    },
    /// Discard the current collection in favor of the reducer's configured
    /// initial one.
    ResetList,
    /// Replace the whole collection with the payload, no merging.
    SetList(Collection<T>),
}

impl<T: Keyed> Op<T> {
    /// The wire kind for this operation, as it appears in serialized
    /// commands and in tracing output.
    pub fn kind(&self) -> &'static str {
        match self {
            Op::InsertItem { .. } => "INSERT_ITEM",
            Op::RemoveItem { .. } => "REMOVE_ITEM",
            Op::RemoveItemByKey { .. } => "REMOVE_ITEM_BY_KEY",
            Op::UpdateItem { .. } => "UPDATE_ITEM",
            Op::UpdateItemByKey { .. } => "UPDATE_ITEM_BY_KEY",
            Op::UpdateItemsByKey { .. } => "UPDATE_ITEMS_BY_KEY",
            Op::ResetList => "RESET_LIST",
            Op::SetList(_) => "SET_LIST",
        }
    }
}

/// Advisory command metadata.
///
/// `list_name` records which list a command was built for. The engine never
/// validates it against the reducer's own configuration; it exists for
/// routing layers and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandMeta {
    /// Logical name of the target list, if the producer recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
}

impl CommandMeta {
    /// Metadata naming a target list.
    pub fn for_list(list_name: impl Into<String>) -> Self {
        Self {
            list_name: Some(list_name.into()),
        }
    }

    /// Helper for serde skip_serializing_if
    fn is_empty(&self) -> bool {
        self.list_name.is_none()
    }
}

/// Helper for serde skip_serializing_if
fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A discrete state-transition instruction.
///
/// Plain data: producers build commands, reducers consume them by reference,
/// and nothing in between interprets them. A command with `error: true` is a
/// failure notification; it reaches the reducer like any other command but
/// must never mutate state, whatever its kind.
///
/// The `metadata` and `error` fields use their defaults when absent from the
/// wire, so minimal `{kind, payload}` records parse as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, T::Key: Serialize",
    deserialize = "T: Deserialize<'de>, T::Key: Deserialize<'de>"
))]
pub struct Command<T: Keyed> {
    /// The operation to apply, flattened into `kind` and `payload` on the
    /// wire
    #[serde(flatten)]
    pub op: Op<T>,
    /// Advisory routing and diagnostic metadata
    #[serde(default, skip_serializing_if = "CommandMeta::is_empty")]
    pub metadata: CommandMeta,
    /// Marks a failure notification; error commands never mutate state
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

impl<T: Keyed> Command<T> {
    /// Wraps an operation in a command with empty metadata and no error
    /// flag.
    pub fn new(op: Op<T>) -> Self {
        Self {
            op,
            metadata: CommandMeta::default(),
            error: false,
        }
    }

    /// An `INSERT_ITEM` command.
    pub fn insert_item(item: T, index: usize) -> Self {
        Self::new(Op::InsertItem { item, index })
    }

    /// A `REMOVE_ITEM` command.
    pub fn remove_item(index: usize) -> Self {
        Self::new(Op::RemoveItem { index })
    }

    /// A `REMOVE_ITEM_BY_KEY` command.
    pub fn remove_item_by_key(key: T::Key) -> Self {
        Self::new(Op::RemoveItemByKey { key })
    }

    /// An `UPDATE_ITEM` command.
    pub fn update_item(item: T, index: usize) -> Self {
        Self::new(Op::UpdateItem { item, index })
    }

    /// An `UPDATE_ITEM_BY_KEY` command.
    pub fn update_item_by_key(item: T) -> Self {
        Self::new(Op::UpdateItemByKey { item })
    }

    /// An `UPDATE_ITEMS_BY_KEY` command.
    pub fn update_items_by_key(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(Op::UpdateItemsByKey {
            items: items.into_iter().collect(),
        })
    }

    /// A `RESET_LIST` command.
    pub fn reset_list() -> Self {
        Self::new(Op::ResetList)
    }

    /// A `SET_LIST` command.
    pub fn set_list(collection: impl Into<Collection<T>>) -> Self {
        Self::new(Op::SetList(collection.into()))
    }

    /// Tags this command with the list it targets.
    pub fn for_list(mut self, list_name: impl Into<String>) -> Self {
        self.metadata = CommandMeta::for_list(list_name);
        self
    }

    /// Marks this command as a failure notification.
    pub fn with_error(mut self) -> Self {
        self.error = true;
        self
    }

    /// The wire kind of the wrapped operation.
    pub fn kind(&self) -> &'static str {
        self.op.kind()
    }
}

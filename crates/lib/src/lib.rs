//!
//! Roster: reducer-style state transitions for ordered, keyed collections.
//!
//! Many applications keep several independent named lists (orders, users,
//! tags) that all want the same insert/remove/update/reset semantics. Roster
//! implements those semantics once, as a pure transition engine that maps a
//! command onto the next version of a collection without ever mutating the
//! previous one.
//!
//! ## Core Concepts
//!
//! * **Collections ([`Collection`])**: ordered, immutable sequences. Every
//!   operation returns a new collection that shares unchanged elements with
//!   the old one.
//! * **Keys ([`Keyed`])**: items carry their own identity; by-key operations
//!   match on value equality of [`Keyed::key`].
//! * **Operations ([`ops`])**: the pure list transformations: insert,
//!   remove, remove-by-key, update, update-by-key, batch-update-by-key,
//!   plus strict `try_` variants that reject bad indices instead of
//!   no-op'ing.
//! * **Commands ([`Command`], [`Op`])**: plain data records describing one
//!   transition each, serializable to the `{kind, payload, metadata, error}`
//!   wire shape.
//! * **Reducers ([`ListReducer`])**: per-list configuration (name, initial
//!   collection) bundled with the transition function
//!   `(state, command) -> state`.
//!
//! ## Example
//!
//! ```
//! use roster::{Command, Keyed, ListConfig, ListReducer, collection};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Tag {
//!     id: u32,
//!     label: String,
//! }
//!
//! impl Keyed for Tag {
//!     type Key = u32;
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! fn tag(id: u32, label: &str) -> Tag {
//!     Tag { id, label: label.into() }
//! }
//!
//! let reducer = ListReducer::new(
//!     ListConfig::new("tags").with_initial(collection![tag(1, "rust")]),
//! );
//!
//! let state = reducer.initial_state();
//! let state = reducer.reduce(&state, &Command::insert_item(tag(2, "reducer"), 1));
//! let state = reducer.reduce(&state, &Command::update_item_by_key(tag(1, "rustlang")));
//!
//! assert_eq!(state.len(), 2);
//! assert_eq!(state.get(0).map(|t| t.label.as_str()), Some("rustlang"));
//!
//! // Error-flagged commands never mutate, whatever their kind.
//! let unchanged = reducer.reduce(&state, &Command::remove_item(0).with_error());
//! assert_eq!(unchanged, state);
//! ```

pub mod collection;
pub mod command;
pub mod item;
pub mod ops;
pub mod reducer;

pub use collection::Collection;
pub use command::{Command, CommandMeta, Op};
pub use item::Keyed;
pub use reducer::{ListConfig, ListReducer};

/// Result type used throughout the roster library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the roster library.
///
/// The reducer's dispatch path is total and never returns this; errors come
/// from the strict operation variants and from tooling built on top.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured operation errors from the ops module
    #[error(transparent)]
    Ops(ops::OpsError),
}

impl Error {
    /// Check if this error is an out-of-bounds index
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::Ops(err) => err.is_out_of_bounds(),
        }
    }
}

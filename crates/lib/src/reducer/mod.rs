//! Configured dispatch: folding commands into list state.
//!
//! [`ListReducer`] pairs one list's configuration ([`ListConfig`]) with the
//! transition function `(state, command) -> state`. Reducers hold no mutable
//! state of their own, so a single instance can serve any number of calls
//! concurrently; the caller owns the state and threads it through.

use crate::{
    Collection,
    command::{Command, Op},
    item::Keyed,
    ops,
};


/// Configuration for one logical list.
///
/// The defaults are deliberately forgiving: an unnamed list with no
/// configured initial collection behaves like an empty one, so partially
/// configured reducers still produce sensible states instead of panicking.
#[derive(Debug)]
pub struct ListConfig<T> {
    list_name: String,
    initial: Option<Collection<T>>,
}

impl<T> ListConfig<T> {
    /// Configuration for the list called `list_name`.
    ///
    /// The name has no behavioral effect; it identifies the reducer in
    /// tracing output and routing layers.
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            initial: None,
        }
    }

    /// Sets the collection that `RESET_LIST` restores and
    /// [`ListReducer::initial_state`] returns.
    ///
    /// Without this, both are the empty collection.
    pub fn with_initial(mut self, initial: Collection<T>) -> Self {
        self.initial = Some(initial);
        self
    }

    /// The configured list name.
    pub fn list_name(&self) -> &str {
        &self.list_name
    }
}

impl<T> Clone for ListConfig<T> {
    fn clone(&self) -> Self {
        Self {
            list_name: self.list_name.clone(),
            initial: self.initial.clone(),
        }
    }
}

impl<T> Default for ListConfig<T> {
    fn default() -> Self {
        Self {
            list_name: String::new(),
            initial: None,
        }
    }
}

/// A pure transition function over one list's state.
///
/// `reduce` maps the current [`Collection`] and a [`Command`] to the next
/// collection. It never mutates its inputs and never fails: conditions a
/// stricter API would reject (out-of-range indices, missing keys, error
/// commands, unknown kinds) all degrade to returning the state unchanged.
///
/// # Examples
///
/// ```
/// use roster::{Command, Keyed, ListConfig, ListReducer};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Order {
///     id: u64,
///     total: u32,
/// }
///
/// impl Keyed for Order {
///     type Key = u64;
///     fn key(&self) -> u64 {
///         self.id
///     }
/// }
///
/// let reducer = ListReducer::new(ListConfig::new("orders"));
///
/// let state = reducer.initial_state();
/// let state = reducer.reduce(&state, &Command::insert_item(Order { id: 1, total: 300 }, 0));
/// let state = reducer.reduce(&state, &Command::update_item_by_key(Order { id: 1, total: 250 }));
///
/// assert_eq!(state.get(0).map(|order| order.total), Some(250));
/// ```
#[derive(Debug)]
pub struct ListReducer<T> {
    config: ListConfig<T>,
}

impl<T> ListReducer<T> {
    /// A reducer for the list `config` describes.
    pub fn new(config: ListConfig<T>) -> Self {
        Self { config }
    }

    /// The name of the list this reducer serves.
    pub fn list_name(&self) -> &str {
        self.config.list_name()
    }

    /// The state a fresh list starts from: the configured initial
    /// collection, or empty if none was configured.
    pub fn initial_state(&self) -> Collection<T> {
        self.config.initial.clone().unwrap_or_default()
    }
}

impl<T: Keyed + Clone> ListReducer<T> {
    /// Applies `command` to `state`, returning the next state.
    ///
    /// The error flag is checked before the kind is even looked at: a
    /// command with `error: true` returns the state unchanged no matter
    /// what operation it carries. `command.metadata` is advisory and not
    /// consulted for dispatch.
    pub fn reduce(&self, state: &Collection<T>, command: &Command<T>) -> Collection<T> {
        if command.error {
            tracing::debug!(
                list = %self.config.list_name,
                kind = command.kind(),
                "error-flagged command; state unchanged"
            );
            return state.clone();
        }

        tracing::trace!(
            list = %self.config.list_name,
            kind = command.kind(),
            len = state.len(),
            "applying command"
        );

        match &command.op {
            Op::InsertItem { item, index } => ops::insert_item(state, item.clone(), *index),
            Op::RemoveItem { index } => ops::remove_item(state, *index),
            Op::RemoveItemByKey { key } => ops::remove_item_by_key(state, key),
            Op::UpdateItem { item, index } => ops::update_item(state, item.clone(), *index),
            Op::UpdateItemByKey { item } => ops::update_item_by_key(state, item.clone()),
            Op::UpdateItemsByKey { items } => ops::update_items_by_key(state, items),
            Op::ResetList => self.initial_state(),
            Op::SetList(collection) => collection.clone(),
            // `Op` is non-exhaustive; kinds this reducer does not know
            // leave state untouched rather than failing.
            #[allow(unreachable_patterns)]
            _ => state.clone(),
        }
    }
}

impl<T> Clone for ListReducer<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
        }
    }
}

impl<T> Default for ListReducer<T> {
    /// An unconfigured reducer: unnamed list, empty initial collection.
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

//! Shared fixtures for the integration suite.

use roster::{Collection, Keyed};
use serde::{Deserialize, Serialize};

/// The record type the suite shuffles around: a minimal keyed row.
///
/// The optional `title` keeps the serialized form down to `{"id": n}` for
/// untitled tickets, which is what wire-shape assertions compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl Keyed for Ticket {
    type Key = u64;
    fn key(&self) -> u64 {
        self.id
    }
}

pub fn ticket(id: u64) -> Ticket {
    Ticket {
        id,
        title: String::new(),
    }
}

pub fn titled(id: u64, title: &str) -> Ticket {
    Ticket {
        id,
        title: title.into(),
    }
}

/// A collection of untitled tickets with the given ids, in order.
pub fn seeded(ids: impl IntoIterator<Item = u64>) -> Collection<Ticket> {
    ids.into_iter().map(ticket).collect()
}

/// The ids of a collection, in order.
pub fn ids(collection: &Collection<Ticket>) -> Vec<u64> {
    collection.iter().map(|ticket| ticket.id).collect()
}

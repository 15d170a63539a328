//! Errors reported by list and item operations.
//!
//! Every failure leaves the `ListStore` exactly as it was before the call.
//! Errors carry only the context a caller needs to phrase its own message.

use crate::ids::{ItemId, ListId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of name failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSubject {
    /// A list name
    List,
    /// An item (todo) name
    Item,
}

impl fmt::Display for NameSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Item => f.write_str("item"),
        }
    }
}

/// The entity an id lookup failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// No list with this id
    List(ListId),
    /// The list exists but holds no item with this id
    Item {
        /// Owning list
        list: ListId,
        /// Missing item
        item: ItemId,
    },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(id) => write!(f, "list {id}"),
            Self::Item { list, item } => write!(f, "item {item} in list {list}"),
        }
    }
}

/// Error type for every `ListStore` operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListError {
    /// Name length (in Unicode scalar values) outside `min..=max`
    #[error("{subject} name has {len} characters, expected {min} to {max}")]
    InvalidLength {
        /// What was being named
        subject: NameSubject,
        /// Observed length
        len: usize,
        /// Smallest accepted length
        min: usize,
        /// Largest accepted length
        max: usize,
    },

    /// Another list already uses this name
    #[error("list name {name:?} is already taken")]
    DuplicateName {
        /// The colliding name
        name: String,
    },

    /// A list or item id did not resolve
    #[error("{0} not found")]
    NotFound(Target),

    /// The store already holds a list with the largest possible id
    #[error("no list ids left to allocate")]
    ListIdsExhausted,

    /// The list already holds an item with the largest possible id
    #[error("no item ids left to allocate in list {list}")]
    ItemIdsExhausted {
        /// List that is full
        list: ListId,
    },
}

impl ListError {
    /// Returns true for [`ListError::NotFound`]
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

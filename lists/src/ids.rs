//! Identifiers and id allocation.
//!
//! Ids are recomputed from the live collection on every allocation: the next
//! id is one past the largest id currently present, or `1` for an empty
//! collection. Emptying a collection therefore restarts its ids at `1`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a [`List`](crate::List), unique within one `ListStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

/// Identifier of an [`Item`](crate::Item), unique within its owning list only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

macro_rules! raw_id {
    ($name:ident) => {
        impl $name {
            /// Wraps a raw integer id
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw integer id
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

raw_id!(ListId);
raw_id!(ItemId);

/// An entity that exposes an integer id within its collection.
pub trait Identified {
    /// The id type of this entity
    type Id: Copy + From<u64> + Into<u64>;

    /// Returns the entity's id
    fn id(&self) -> Self::Id;
}

/// Allocates the id for a new entity appended to `collection`.
///
/// Returns `1` for an empty collection, otherwise the current maximum plus one.
/// Returns `None` when the maximum is already `u64::MAX`: the next id would
/// repeat one already present.
///
/// # Example
///
/// ```
/// use session_lists::{next_id, List, ListId};
///
/// let lists = vec![List::new(ListId::new(4), "Work"), List::new(ListId::new(2), "Home")];
/// assert_eq!(next_id(&lists), Some(ListId::new(5)));
/// assert_eq!(next_id::<List>(&[]), Some(ListId::new(1)));
///
/// let full = vec![List::new(ListId::new(u64::MAX), "Last")];
/// assert_eq!(next_id(&full), None);
/// ```
#[must_use]
pub fn next_id<T: Identified>(collection: &[T]) -> Option<T::Id> {
    collection
        .iter()
        .map(|entity| Into::<u64>::into(entity.id()))
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
        .map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity(u64);

    impl Identified for Entity {
        type Id = ItemId;

        fn id(&self) -> ItemId {
            ItemId::new(self.0)
        }
    }

    #[test]
    fn empty_collection_starts_at_one() {
        assert_eq!(next_id::<Entity>(&[]), Some(ItemId::new(1)));
    }

    #[test]
    fn uses_maximum_not_last() {
        let entities = [Entity(3), Entity(9), Entity(2)];
        assert_eq!(next_id(&entities), Some(ItemId::new(10)));
    }

    #[test]
    fn recomputes_after_maximum_removed() {
        let mut entities = vec![Entity(1), Entity(2), Entity(3)];
        entities.pop();
        assert_eq!(next_id(&entities), Some(ItemId::new(3)));
    }

    #[test]
    fn exhausted_when_maximum_is_taken() {
        assert_eq!(next_id(&[Entity(u64::MAX)]), None);
        assert_eq!(next_id(&[Entity(3), Entity(u64::MAX)]), None);
        assert_eq!(
            next_id(&[Entity(u64::MAX - 1)]),
            Some(ItemId::new(u64::MAX))
        );
    }

    #[test]
    fn ids_display_as_integers() {
        assert_eq!(ListId::new(7).to_string(), "7");
        assert_eq!(u64::from(ItemId::from(12)), 12);
    }
}

//! Completion state of items and lists.

use crate::types::{Item, List};

/// Anything with a done/not-done status.
pub trait Completable {
    /// Returns true when the entity counts as done
    fn is_complete(&self) -> bool;
}

impl Completable for Item {
    fn is_complete(&self) -> bool {
        is_item_complete(self)
    }
}

impl Completable for List {
    fn is_complete(&self) -> bool {
        is_list_complete(self)
    }
}

/// An item is complete when its flag says so.
#[must_use]
pub const fn is_item_complete(item: &Item) -> bool {
    item.completed
}

/// A list is complete when it has at least one item and every item is done.
///
/// An empty list is never complete.
#[must_use]
pub fn is_list_complete(list: &List) -> bool {
    !list.items.is_empty() && list.items.iter().all(is_item_complete)
}

/// Number of items not yet done.
#[must_use]
pub fn remaining_count(list: &List) -> usize {
    list.items.iter().filter(|item| !item.completed).count()
}

/// Number of items in the list.
#[must_use]
pub fn total_count(list: &List) -> usize {
    list.items.len()
}

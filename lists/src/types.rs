//! Domain types for session lists.
//!
//! A `ListStore` owns its lists and each `List` owns its items. Vector order
//! is insertion order, which is also the order the store is persisted in.
//! Display order is derived separately (see [`crate::ordering`]).

use crate::ids::{Identified, ItemId, ListId};
use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the owning list
    pub id: ItemId,
    /// 1 to 100 characters
    pub name: String,
    /// Whether the item is done
    pub completed: bool,
}

impl Item {
    /// Creates a new, not yet completed item
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

impl Identified for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// A named list of items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Unique within the store
    pub id: ListId,
    /// 1 to 100 characters, unique within the store
    pub name: String,
    /// Items in insertion order
    pub items: Vec<Item>,
}

impl List {
    /// Creates a new list with no items
    #[must_use]
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Returns an item by id
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl Identified for List {
    type Id = ListId;

    fn id(&self) -> ListId {
        self.id
    }
}

/// All lists belonging to one session.
///
/// Fields are private so that every mutation goes through the checked
/// operations in [`crate::store`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStore {
    lists: Vec<List>,
}

impl ListStore {
    /// Creates an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Lists in insertion order
    #[must_use]
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Returns a list by id
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Returns an item by owning list id and item id
    #[must_use]
    pub fn item(&self, list_id: ListId, item_id: ItemId) -> Option<&Item> {
        self.list(list_id).and_then(|list| list.item(item_id))
    }

    /// Number of lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true when the store holds no lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub(crate) fn lists_mut(&mut self) -> &mut Vec<List> {
        &mut self.lists
    }

    pub(crate) fn list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn item_new_is_incomplete() {
        let item = Item::new(ItemId::new(1), "Buy milk");
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.name, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn list_new_is_empty() {
        let list = List::new(ListId::new(3), "Groceries");
        assert_eq!(list.id(), ListId::new(3));
        assert!(list.items.is_empty());
        assert!(list.item(ItemId::new(1)).is_none());
    }

    #[test]
    fn store_lookups_resolve_by_id() {
        let mut store = ListStore::new();
        let mut list = List::new(ListId::new(7), "Work");
        list.items.push(Item::new(ItemId::new(2), "Report"));
        store.lists_mut().push(list);

        assert_eq!(store.len(), 1);
        assert!(store.list(ListId::new(1)).is_none());
        assert_eq!(
            store.item(ListId::new(7), ItemId::new(2)).map(|i| i.name.as_str()),
            Some("Report")
        );
    }

    #[test]
    fn store_serializes_as_plain_json() {
        let mut store = ListStore::new();
        store.lists_mut().push(List::new(ListId::new(1), "Home"));

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lists": [{ "id": 1, "name": "Home", "items": [] }] })
        );

        let back: ListStore = serde_json::from_value(json).unwrap();
        assert_eq!(back, store);
    }
}

//! Checked operations on a `ListStore`.
//!
//! Each operation resolves its targets by id and validates its input before
//! touching any state, so an `Err` always means nothing changed.

use crate::error::{ListError, Target};
use crate::ids::{next_id, ItemId, ListId};
use crate::types::{Item, List, ListStore};
use crate::validation::{validate_item_name, validate_list_name};

impl ListStore {
    /// Creates a list with no items and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidLength`] or [`ListError::DuplicateName`], or
    /// [`ListError::ListIdsExhausted`] when no unused id is left.
    pub fn add_list(&mut self, name: &str) -> Result<&List, ListError> {
        validate_list_name(name, self.lists(), None)?;

        let id = next_id(self.lists()).ok_or(ListError::ListIdsExhausted)?;
        let lists = self.lists_mut();
        lists.push(List::new(id, name));
        Ok(&lists[lists.len() - 1])
    }

    /// Renames a list in place; its id and items are untouched.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no list has `id`, otherwise any name
    /// validation error. Renaming a list to its current name succeeds.
    pub fn rename_list(&mut self, id: ListId, new_name: &str) -> Result<&List, ListError> {
        let current = self.require_list(id)?;
        validate_list_name(new_name, self.lists(), Some(current.name.as_str()))?;

        let list = self.require_list_mut(id)?;
        new_name.clone_into(&mut list.name);
        Ok(&*list)
    }

    /// Removes a list together with all of its items and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no list has `id`.
    pub fn delete_list(&mut self, id: ListId) -> Result<List, ListError> {
        let lists = self.lists_mut();
        let position = lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(ListError::NotFound(Target::List(id)))?;
        Ok(lists.remove(position))
    }

    /// Appends a new, incomplete item to a list and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no list has `list_id`, otherwise
    /// [`ListError::InvalidLength`], or [`ListError::ItemIdsExhausted`] when
    /// the list has no unused id left.
    pub fn add_item(&mut self, list_id: ListId, name: &str) -> Result<&Item, ListError> {
        let list = self.require_list_mut(list_id)?;
        validate_item_name(name)?;

        let id = next_id(&list.items).ok_or(ListError::ItemIdsExhausted { list: list_id })?;
        list.items.push(Item::new(id, name));
        Ok(&list.items[list.items.len() - 1])
    }

    /// Sets an item's completion flag.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if the list or the item is missing.
    pub fn set_item_completed(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        completed: bool,
    ) -> Result<&Item, ListError> {
        let item = self
            .require_list_mut(list_id)?
            .item_mut(item_id)
            .ok_or(ListError::NotFound(Target::Item {
                list: list_id,
                item: item_id,
            }))?;
        item.completed = completed;
        Ok(&*item)
    }

    /// Removes an item from its list and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if the list or the item is missing.
    pub fn delete_item(&mut self, list_id: ListId, item_id: ItemId) -> Result<Item, ListError> {
        let list = self.require_list_mut(list_id)?;
        let position = list
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(ListError::NotFound(Target::Item {
                list: list_id,
                item: item_id,
            }))?;
        Ok(list.items.remove(position))
    }

    /// Marks every item of a list as completed. Idempotent.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no list has `list_id`.
    pub fn complete_all(&mut self, list_id: ListId) -> Result<&List, ListError> {
        let list = self.require_list_mut(list_id)?;
        for item in &mut list.items {
            item.completed = true;
        }
        Ok(&*list)
    }

    fn require_list(&self, id: ListId) -> Result<&List, ListError> {
        self.list(id).ok_or(ListError::NotFound(Target::List(id)))
    }

    fn require_list_mut(&mut self, id: ListId) -> Result<&mut List, ListError> {
        self.list_mut(id).ok_or(ListError::NotFound(Target::List(id)))
    }
}

//! Response bodies for list and todo routes.
//!
//! Collections are rendered in display order (incomplete entries first),
//! and every entry keeps its `index` in the stored collection.

use serde::Serialize;
use session_lists::{
    is_list_complete, partition_by_completion, remaining_count, total_count, Item, ItemId, List,
    ListId,
};

/// One row of the lists overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    /// List id
    pub id: ListId,
    /// List name
    pub name: String,
    /// Todos not yet completed
    pub remaining: usize,
    /// All todos
    pub total: usize,
    /// Non-empty with every todo completed
    pub complete: bool,
    /// Position in the stored collection
    pub index: usize,
}

impl ListSummary {
    fn new(list: &List, index: usize) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            remaining: remaining_count(list),
            total: total_count(list),
            complete: is_list_complete(list),
            index,
        }
    }
}

/// A todo as shown inside a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Todo id
    pub id: ItemId,
    /// Todo text
    pub name: String,
    /// Completion flag
    pub completed: bool,
    /// Position in the stored collection
    pub index: usize,
}

impl TodoView {
    /// View of a single todo at `index`.
    #[must_use]
    pub fn new(item: &Item, index: usize) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            completed: item.completed,
            index,
        }
    }
}

/// A list with its todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDetail {
    /// List id
    pub id: ListId,
    /// List name
    pub name: String,
    /// Todos not yet completed
    pub remaining: usize,
    /// All todos
    pub total: usize,
    /// Non-empty with every todo completed
    pub complete: bool,
    /// Todos in display order
    pub todos: Vec<TodoView>,
}

impl ListDetail {
    /// Detail view of `list`.
    #[must_use]
    pub fn new(list: &List) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            remaining: remaining_count(list),
            total: total_count(list),
            complete: is_list_complete(list),
            todos: partition_by_completion(&list.items)
                .map(|(item, index)| TodoView::new(item, index))
                .collect(),
        }
    }
}

/// Overview of all lists in display order.
#[must_use]
pub fn list_summaries(lists: &[List]) -> Vec<ListSummary> {
    partition_by_completion(lists)
        .map(|(list, index)| ListSummary::new(list, index))
        .collect()
}

/// Body of a successful mutation: a notice plus the affected entity, if any.
#[derive(Debug, Clone, Serialize)]
pub struct Notice<T: Serialize> {
    /// Human-readable outcome
    pub notice: String,
    /// Entity after the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Notice<T> {
    /// Notice carrying the affected entity.
    pub fn with_data(notice: impl Into<String>, data: T) -> Self {
        Self {
            notice: notice.into(),
            data: Some(data),
        }
    }
}

impl Notice<()> {
    /// Notice with no entity attached.
    pub fn bare(notice: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
            data: None,
        }
    }
}

//! Reducer for the lists aggregate.
//!
//! Every command maps onto one checked `ListStore` operation and produces
//! exactly one event: a success event describing what changed, or
//! [`ListsEvent::Rejected`] carrying the error. Rejections never touch state.

use crate::error::ListError;
use crate::ids::{ItemId, ListId};
use crate::types::ListStore;
use serde::{Deserialize, Serialize};
use session_lists_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Commands accepted by [`ListsReducer`]
///
/// Names arrive already trimmed and ids already parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListsCommand {
    /// Create a list
    CreateList {
        /// Candidate name
        name: String,
    },
    /// Rename a list
    RenameList {
        /// List to rename
        id: ListId,
        /// Candidate name
        name: String,
    },
    /// Delete a list and its items
    DeleteList {
        /// List to delete
        id: ListId,
    },
    /// Append an item to a list
    AddItem {
        /// Owning list
        list_id: ListId,
        /// Candidate name
        name: String,
    },
    /// Set one item's completion flag
    SetItemCompleted {
        /// Owning list
        list_id: ListId,
        /// Item to update
        item_id: ItemId,
        /// New flag value
        completed: bool,
    },
    /// Delete one item
    DeleteItem {
        /// Owning list
        list_id: ListId,
        /// Item to delete
        item_id: ItemId,
    },
    /// Mark every item of a list complete
    CompleteAll {
        /// List to complete
        list_id: ListId,
    },
}

/// Outcomes emitted by [`ListsReducer`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListsEvent {
    /// A list was created
    ListCreated {
        /// Allocated id
        id: ListId,
        /// Accepted name
        name: String,
    },
    /// A list was renamed
    ListRenamed {
        /// Renamed list
        id: ListId,
        /// New name
        name: String,
    },
    /// A list and its items were deleted
    ListDeleted {
        /// Deleted list
        id: ListId,
        /// Name the list had
        name: String,
    },
    /// An item was appended
    ItemAdded {
        /// Owning list
        list_id: ListId,
        /// Allocated id
        item_id: ItemId,
        /// Accepted name
        name: String,
    },
    /// An item's completion flag was set
    ItemCompletionSet {
        /// Owning list
        list_id: ListId,
        /// Updated item
        item_id: ItemId,
        /// New flag value
        completed: bool,
    },
    /// An item was deleted
    ItemDeleted {
        /// Owning list
        list_id: ListId,
        /// Deleted item
        item_id: ItemId,
        /// Name the item had
        name: String,
    },
    /// Every item of a list is now complete
    AllItemsCompleted {
        /// Completed list
        list_id: ListId,
        /// Number of items in the list
        total: usize,
    },
    /// The command was refused; state is unchanged
    Rejected {
        /// Why
        error: ListError,
    },
}

impl ListsEvent {
    /// Returns the error of a [`ListsEvent::Rejected`] event
    #[must_use]
    pub const fn rejection(&self) -> Option<&ListError> {
        match self {
            Self::Rejected { error } => Some(error),
            _ => None,
        }
    }
}

/// Reducer for the lists aggregate
#[derive(Clone, Copy, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies a command to the store
    fn apply(store: &mut ListStore, command: ListsCommand) -> Result<ListsEvent, ListError> {
        match command {
            ListsCommand::CreateList { name } => {
                let list = store.add_list(&name)?;
                Ok(ListsEvent::ListCreated {
                    id: list.id,
                    name: list.name.clone(),
                })
            }
            ListsCommand::RenameList { id, name } => {
                let list = store.rename_list(id, &name)?;
                Ok(ListsEvent::ListRenamed {
                    id,
                    name: list.name.clone(),
                })
            }
            ListsCommand::DeleteList { id } => {
                let list = store.delete_list(id)?;
                Ok(ListsEvent::ListDeleted {
                    id,
                    name: list.name,
                })
            }
            ListsCommand::AddItem { list_id, name } => {
                let item = store.add_item(list_id, &name)?;
                Ok(ListsEvent::ItemAdded {
                    list_id,
                    item_id: item.id,
                    name: item.name.clone(),
                })
            }
            ListsCommand::SetItemCompleted {
                list_id,
                item_id,
                completed,
            } => {
                store.set_item_completed(list_id, item_id, completed)?;
                Ok(ListsEvent::ItemCompletionSet {
                    list_id,
                    item_id,
                    completed,
                })
            }
            ListsCommand::DeleteItem { list_id, item_id } => {
                let item = store.delete_item(list_id, item_id)?;
                Ok(ListsEvent::ItemDeleted {
                    list_id,
                    item_id,
                    name: item.name,
                })
            }
            ListsCommand::CompleteAll { list_id } => {
                let list = store.complete_all(list_id)?;
                Ok(ListsEvent::AllItemsCompleted {
                    list_id,
                    total: list.items.len(),
                })
            }
        }
    }
}

impl Reducer for ListsReducer {
    type State = ListStore;
    type Action = ListsCommand;
    type Event = ListsEvent;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Event>; 4]> {
        let event = match Self::apply(state, action) {
            Ok(event) => {
                tracing::debug!(?event, "command applied");
                event
            }
            Err(error) => {
                tracing::warn!(%error, "command rejected");
                ListsEvent::Rejected { error }
            }
        };

        smallvec![Effect::Emit(event)]
    }
}

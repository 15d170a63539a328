//! User-facing wording for outcomes.
//!
//! The domain crate reports structured errors and events; this module turns
//! them into the one-line notices a person reads.

use session_lists::{ListError, NameSubject, Target};

/// Notice after a list is created.
pub const LIST_CREATED: &str = "The list has been created.";
/// Notice after a list is renamed.
pub const LIST_UPDATED: &str = "The list has been updated.";
/// Notice after a todo is added.
pub const TODO_ADDED: &str = "The todo was added.";
/// Notice after a todo's completion is set.
pub const TODO_UPDATED: &str = "The todo has been updated.";
/// Notice after a todo is deleted.
pub const TODO_DELETED: &str = "The todo has been deleted.";
/// Notice after every todo in a list is completed.
pub const ALL_COMPLETED: &str = "All todos have been completed.";

/// Notice after a list is deleted.
#[must_use]
pub fn list_deleted(name: &str) -> String {
    format!("The list \"{name}\" has been deleted.")
}

/// Message shown for a rejected operation.
#[must_use]
pub fn error_message(err: &ListError) -> String {
    match err {
        ListError::InvalidLength {
            subject: NameSubject::List,
            min,
            max,
            ..
        } => format!("List name must be between {min} and {max} characters."),
        ListError::InvalidLength {
            subject: NameSubject::Item,
            min,
            max,
            ..
        } => format!("Todo must be between {min} and {max} characters."),
        ListError::DuplicateName { .. } => "The name for the list is already taken.".to_string(),
        ListError::NotFound(Target::List(_)) => "The specified list was not found.".to_string(),
        ListError::NotFound(Target::Item { .. }) => {
            "The specified todo was not found.".to_string()
        }
        ListError::ListIdsExhausted => "No more lists can be created.".to_string(),
        ListError::ItemIdsExhausted { .. } => {
            "No more todos can be added to this list.".to_string()
        }
    }
}

//! HTTP request handlers.
//!
//! Handlers trim incoming names, turn the request into a [`ListsCommand`],
//! send it through the session's store and map the single resulting event
//! back to a response.

pub mod health;
pub mod lists;
pub mod todos;

pub use health::health_check;

use crate::error::AppError;
use crate::session::ListsStore;
use session_lists::{ItemId, ListError, ListId, ListsCommand, ListsEvent, Target};

/// Send `command` to a session's store and return its outcome event.
///
/// A [`ListsEvent::Rejected`] outcome becomes the matching [`AppError`].
async fn dispatch(store: &ListsStore, command: ListsCommand) -> Result<ListsEvent, AppError> {
    let events = store.send(command).await;

    match events.into_iter().next() {
        Some(ListsEvent::Rejected { error }) => Err(error.into()),
        Some(event) => Ok(event),
        None => Err(AppError::internal("Command produced no outcome")),
    }
}

/// A success event that does not belong to the command that was sent.
fn unexpected(event: &ListsEvent) -> AppError {
    AppError::internal("Unexpected command outcome")
        .with_source(anyhow::anyhow!("unexpected event {event:?}"))
}

/// Parse a list id path segment. Anything that is not a decimal id names no list.
fn parse_list_id(raw: &str) -> Result<ListId, AppError> {
    raw.parse::<u64>()
        .map(ListId::new)
        .map_err(|_| ListError::NotFound(Target::List(ListId::new(0))).into())
}

/// Parse the `(list, todo)` path segments of a todo route.
fn parse_item_path(list: &str, item: &str) -> Result<(ListId, ItemId), AppError> {
    let list_id = parse_list_id(list)?;
    let item_id = item.parse::<u64>().map(ItemId::new).map_err(|_| {
        AppError::from(ListError::NotFound(Target::Item {
            list: list_id,
            item: ItemId::new(0),
        }))
    })?;
    Ok((list_id, item_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn numeric_segments_parse() {
        assert!(matches!(parse_list_id("12"), Ok(id) if id == ListId::new(12)));
        assert!(matches!(
            parse_item_path("3", "4"),
            Ok((list, item)) if list == ListId::new(3) && item == ItemId::new(4)
        ));
    }

    #[test]
    fn garbage_segments_are_not_found() {
        let Err(err) = parse_list_id("abc") else {
            unreachable!("non-numeric id must not parse");
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "The specified list was not found.");

        let Err(err) = parse_item_path("1", "-2") else {
            unreachable!("negative id must not parse");
        };
        assert_eq!(err.message(), "The specified todo was not found.");
    }
}

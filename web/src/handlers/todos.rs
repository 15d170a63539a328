//! Todo routes: add, set completion, delete.

use super::lists::load_detail;
use super::{dispatch, parse_item_path, parse_list_id, unexpected};
use crate::error::AppError;
use crate::extractors::CurrentSession;
use crate::notices;
use crate::session::ListsStore;
use crate::views::{ListDetail, Notice, TodoView};
use axum::{extract::Path, http::StatusCode, Json};
use serde::Deserialize;
use session_lists::{ItemId, ListError, ListId, ListsCommand, ListsEvent, Target};

/// Body of an add-todo request.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    /// Todo text, trimmed before validation
    pub todo: String,
}

/// Body of a completion update.
#[derive(Debug, Deserialize)]
pub struct CompletionForm {
    /// New completion flag
    pub completed: bool,
}

/// `POST /lists/:id/todos`: append a todo.
///
/// # Errors
///
/// 404 when the list does not exist, 422 when the text is too short or too long.
pub async fn add_todo(
    session: CurrentSession,
    Path(list_id): Path<String>,
    Json(form): Json<TodoForm>,
) -> Result<(StatusCode, Json<Notice<ListDetail>>), AppError> {
    let list_id = parse_list_id(&list_id)?;
    let name = form.todo.trim().to_string();
    let store = session.store().await;

    match dispatch(&store, ListsCommand::AddItem { list_id, name }).await? {
        ListsEvent::ItemAdded {
            list_id, item_id, ..
        } => {
            tracing::info!(
                session = %session.id,
                list_id = %list_id,
                todo_id = %item_id,
                "Todo added"
            );
            let detail = load_detail(&store, list_id).await?;
            Ok((
                StatusCode::CREATED,
                Json(Notice::with_data(notices::TODO_ADDED, detail)),
            ))
        }
        other => Err(unexpected(&other)),
    }
}

/// `POST /lists/:id/todos/:todo_id`: set a todo's completion flag.
///
/// # Errors
///
/// 404 when the list or todo does not exist.
pub async fn update_todo(
    session: CurrentSession,
    Path((list_id, todo_id)): Path<(String, String)>,
    Json(form): Json<CompletionForm>,
) -> Result<Json<Notice<TodoView>>, AppError> {
    let (list_id, item_id) = parse_item_path(&list_id, &todo_id)?;
    let store = session.store().await;
    let command = ListsCommand::SetItemCompleted {
        list_id,
        item_id,
        completed: form.completed,
    };

    match dispatch(&store, command).await? {
        ListsEvent::ItemCompletionSet {
            list_id,
            item_id,
            completed,
        } => {
            tracing::info!(
                session = %session.id,
                list_id = %list_id,
                todo_id = %item_id,
                completed,
                "Todo updated"
            );
            let view = load_todo(&store, list_id, item_id).await?;
            Ok(Json(Notice::with_data(notices::TODO_UPDATED, view)))
        }
        other => Err(unexpected(&other)),
    }
}

/// `POST /lists/:id/todos/:todo_id/delete`: remove a todo.
///
/// # Errors
///
/// 404 when the list or todo does not exist.
pub async fn delete_todo(
    session: CurrentSession,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Json<Notice<()>>, AppError> {
    let (list_id, item_id) = parse_item_path(&list_id, &todo_id)?;
    let store = session.store().await;

    match dispatch(&store, ListsCommand::DeleteItem { list_id, item_id }).await? {
        ListsEvent::ItemDeleted {
            list_id, item_id, ..
        } => {
            tracing::info!(
                session = %session.id,
                list_id = %list_id,
                todo_id = %item_id,
                "Todo deleted"
            );
            Ok(Json(Notice::bare(notices::TODO_DELETED)))
        }
        other => Err(unexpected(&other)),
    }
}

/// Render the current state of one todo, with its position in the list.
async fn load_todo(
    store: &ListsStore,
    list_id: ListId,
    item_id: ItemId,
) -> Result<TodoView, AppError> {
    store
        .state(|s| {
            s.list(list_id).and_then(|list| {
                list.items
                    .iter()
                    .enumerate()
                    .find(|(_, item)| item.id == item_id)
                    .map(|(index, item)| TodoView::new(item, index))
            })
        })
        .await
        .ok_or_else(|| {
            ListError::NotFound(Target::Item {
                list: list_id,
                item: item_id,
            })
            .into()
        })
}

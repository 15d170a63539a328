//! List routes: overview, create, show, rename, delete, complete all.

use super::{dispatch, parse_list_id, unexpected};
use crate::error::AppError;
use crate::extractors::CurrentSession;
use crate::notices;
use crate::session::ListsStore;
use crate::views::{list_summaries, ListDetail, ListSummary, Notice};
use axum::{
    extract::Path,
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::Deserialize;
use session_lists::{ListError, ListId, ListsCommand, ListsEvent, Target};

/// Body of create and rename requests.
#[derive(Debug, Deserialize)]
pub struct ListNameForm {
    /// Candidate list name, trimmed before validation
    pub list_name: String,
}

/// `GET /` sends visitors to the overview.
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// `GET /lists`: every list, incomplete lists first.
///
/// A session that has never changed anything has no lists.
pub async fn list_lists(session: CurrentSession) -> Json<Vec<ListSummary>> {
    let summaries = match session.existing_store().await {
        Some(store) => store.state(|s| list_summaries(s.lists())).await,
        None => Vec::new(),
    };
    Json(summaries)
}

/// `POST /lists`: create a list.
///
/// # Errors
///
/// 422 when the name is too short, too long or already taken.
pub async fn create_list(
    session: CurrentSession,
    Json(form): Json<ListNameForm>,
) -> Result<(StatusCode, Json<Notice<ListDetail>>), AppError> {
    let name = form.list_name.trim().to_string();
    let store = session.store().await;

    match dispatch(&store, ListsCommand::CreateList { name }).await? {
        ListsEvent::ListCreated { id, name } => {
            tracing::info!(
                session = %session.id,
                list_id = %id,
                list_name = %name,
                "List created"
            );
            let detail = load_detail(&store, id).await?;
            Ok((
                StatusCode::CREATED,
                Json(Notice::with_data(notices::LIST_CREATED, detail)),
            ))
        }
        other => Err(unexpected(&other)),
    }
}

/// `GET /lists/:id`: one list with its todos in display order.
///
/// # Errors
///
/// 404 when the list does not exist.
pub async fn show_list(
    session: CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<ListDetail>, AppError> {
    let id = parse_list_id(&id)?;
    let Some(store) = session.existing_store().await else {
        return Err(ListError::NotFound(Target::List(id)).into());
    };
    load_detail(&store, id).await.map(Json)
}

/// `POST /lists/:id`: rename a list.
///
/// # Errors
///
/// 404 when the list does not exist, 422 when the name is rejected.
pub async fn rename_list(
    session: CurrentSession,
    Path(id): Path<String>,
    Json(form): Json<ListNameForm>,
) -> Result<Json<Notice<ListDetail>>, AppError> {
    let id = parse_list_id(&id)?;
    let name = form.list_name.trim().to_string();
    let store = session.store().await;

    match dispatch(&store, ListsCommand::RenameList { id, name }).await? {
        ListsEvent::ListRenamed { id, name } => {
            tracing::info!(
                session = %session.id,
                list_id = %id,
                list_name = %name,
                "List renamed"
            );
            let detail = load_detail(&store, id).await?;
            Ok(Json(Notice::with_data(notices::LIST_UPDATED, detail)))
        }
        other => Err(unexpected(&other)),
    }
}

/// `POST /lists/:id/delete`: delete a list and its todos.
///
/// # Errors
///
/// 404 when the list does not exist.
pub async fn delete_list(
    session: CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<Notice<()>>, AppError> {
    let id = parse_list_id(&id)?;
    let store = session.store().await;

    match dispatch(&store, ListsCommand::DeleteList { id }).await? {
        ListsEvent::ListDeleted { id, name } => {
            tracing::info!(
                session = %session.id,
                list_id = %id,
                list_name = %name,
                "List deleted"
            );
            Ok(Json(Notice::bare(notices::list_deleted(&name))))
        }
        other => Err(unexpected(&other)),
    }
}

/// `POST /lists/:id/complete_all`: mark every todo of a list done.
///
/// # Errors
///
/// 404 when the list does not exist.
pub async fn complete_all(
    session: CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<Notice<ListDetail>>, AppError> {
    let id = parse_list_id(&id)?;
    let store = session.store().await;

    match dispatch(&store, ListsCommand::CompleteAll { list_id: id }).await? {
        ListsEvent::AllItemsCompleted { list_id, total } => {
            tracing::info!(session = %session.id, list_id = %list_id, total, "All todos completed");
            let detail = load_detail(&store, list_id).await?;
            Ok(Json(Notice::with_data(notices::ALL_COMPLETED, detail)))
        }
        other => Err(unexpected(&other)),
    }
}

/// Render the current state of list `id`.
pub(super) async fn load_detail(store: &ListsStore, id: ListId) -> Result<ListDetail, AppError> {
    store
        .state(|s| s.list(id).map(ListDetail::new))
        .await
        .ok_or_else(|| ListError::NotFound(Target::List(id)).into())
}

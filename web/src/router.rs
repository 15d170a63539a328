//! Route table.

use crate::handlers::{health, lists, todos};
use crate::middleware::session_layer;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the application router with its session and tracing layers.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let cookie_name = state.config.session_cookie.clone();

    Router::new()
        .route("/", get(lists::index))
        .route("/lists", get(lists::list_lists).post(lists::create_list))
        .route("/lists/:id", get(lists::show_list).post(lists::rename_list))
        .route("/lists/:id/delete", post(lists::delete_list))
        .route("/lists/:id/complete_all", post(lists::complete_all))
        .route("/lists/:id/todos", post(todos::add_todo))
        .route("/lists/:id/todos/:todo_id", post(todos::update_todo))
        .route("/lists/:id/todos/:todo_id/delete", post(todos::delete_todo))
        .route("/health", get(health::health_check))
        .layer(session_layer(cookie_name))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

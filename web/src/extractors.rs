//! Custom Axum extractors.
//!
//! `CurrentSession` resolves the session id placed in request extensions by
//! [`crate::middleware::session_layer`]. Read-only handlers look the store up
//! with [`CurrentSession::existing_store`]; only handlers that change state
//! call [`CurrentSession::store`], which creates it.
//!
//! ```ignore
//! async fn handler(session: CurrentSession) -> Result<Json<usize>, AppError> {
//!     let count = match session.existing_store().await {
//!         Some(store) => store.state(ListStore::len).await,
//!         None => 0,
//!     };
//!     Ok(Json(count))
//! }
//! ```

use crate::error::AppError;
use crate::session::{ListsStore, SessionId, SessionRegistry};
use crate::state::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// The calling session.
#[derive(Clone)]
pub struct CurrentSession {
    /// Session id from the cookie
    pub id: SessionId,
    registry: Arc<SessionRegistry>,
}

impl CurrentSession {
    /// The session's store, created empty if the session has none yet.
    pub async fn store(&self) -> Arc<ListsStore> {
        self.registry.get_or_create(self.id).await
    }

    /// The session's store, if it has one.
    pub async fn existing_store(&self) -> Option<Arc<ListsStore>> {
        self.registry.get(self.id).await
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| AppError::internal("Session middleware not installed"))?;

        Ok(Self {
            id,
            registry: Arc::clone(&state.sessions),
        })
    }
}

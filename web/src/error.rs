//! Error types for web handlers.
//!
//! `AppError` bridges list errors and HTTP responses by implementing Axum's
//! `IntoResponse`. The user-facing wording lives in [`crate::notices`].

use crate::notices;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use session_lists::ListError;
use std::fmt;

/// Application error type for web handlers.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Attach an internal source error (logged, never sent to the client).
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "NOT_FOUND")
    }

    /// Create a 409 Conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message, "CONFLICT")
    }

    /// Create a 422 Unprocessable Entity error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message, "VALIDATION_ERROR")
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_SERVER_ERROR")
    }

    /// HTTP status of this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<ListError> for AppError {
    fn from(err: ListError) -> Self {
        let message = notices::error_message(&err);
        match err {
            ListError::InvalidLength { .. } | ListError::DuplicateName { .. } => {
                Self::validation(message)
            }
            ListError::NotFound(_) => Self::not_found(message),
            ListError::ListIdsExhausted | ListError::ItemIdsExhausted { .. } => {
                Self::conflict(message)
            }
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: &'static str,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                ),
                None => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    "Internal server error"
                ),
            }
        } else {
            tracing::info!(
                status = %self.status,
                code = self.code,
                message = %self.message,
                "Request refused"
            );
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_lists::{ItemId, ListId, NameSubject, Target};

    #[test]
    fn test_error_display() {
        let err = AppError::not_found("No such list");
        assert_eq!(err.to_string(), "[NOT_FOUND] No such list");
    }

    #[test]
    fn test_invalid_length_maps_to_422() {
        let err = AppError::from(ListError::InvalidLength {
            subject: NameSubject::List,
            len: 0,
            min: 1,
            max: 100,
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.message(), "List name must be between 1 and 100 characters.");
    }

    #[test]
    fn test_duplicate_maps_to_422() {
        let err = AppError::from(ListError::DuplicateName {
            name: "Work".to_string(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message(), "The name for the list is already taken.");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::from(ListError::NotFound(Target::Item {
            list: ListId::new(1),
            item: ItemId::new(2),
        }));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "The specified todo was not found.");
    }

    #[test]
    fn test_exhausted_ids_map_to_409() {
        let err = AppError::from(ListError::ItemIdsExhausted {
            list: ListId::new(1),
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "No more todos can be added to this list.");
    }

    #[test]
    fn test_internal_hides_source() {
        let err = AppError::internal("An internal error occurred")
            .with_source(anyhow::anyhow!("unexpected event"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "An internal error occurred");
        assert!(std::error::Error::source(&err).is_some());
    }
}

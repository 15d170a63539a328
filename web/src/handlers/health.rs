//! Health check endpoint.
//!
//! Used by load balancers and monitoring to verify the process is serving.

use axum::http::StatusCode;

/// Liveness check.
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

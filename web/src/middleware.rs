//! Axum middleware that attaches a session to every request.
//!
//! # Flow
//!
//! 1. **Read** the session id from the session cookie (or mint a new UUID)
//! 2. **Store** the [`SessionId`] in request extensions for extractors
//! 3. **Create a tracing span** with the session id
//! 4. **Set** the cookie on the response when the id was minted here
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/lists", get(list_lists))
//!     .layer(session_layer("session_lists_sid"));
//! ```

use crate::session::SessionId;
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    response::Response,
};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Instrument;

/// Create a layer that resolves or mints the session id for each request.
#[must_use]
pub fn session_layer(cookie_name: impl Into<Arc<str>>) -> SessionLayer {
    SessionLayer {
        cookie_name: cookie_name.into(),
    }
}

/// Layer for session cookie handling.
#[derive(Clone, Debug)]
pub struct SessionLayer {
    cookie_name: Arc<str>,
}

impl<S> Layer<S> for SessionLayer {
    type Service = SessionMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionMiddleware {
            inner,
            cookie_name: Arc::clone(&self.cookie_name),
        }
    }
}

/// Middleware service for session cookie handling.
#[derive(Clone, Debug)]
pub struct SessionMiddleware<S> {
    inner: S,
    cookie_name: Arc<str>,
}

impl<S> Service<Request> for SessionMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let existing = session_from_cookies(&req, &self.cookie_name);
        let session_id = existing.unwrap_or_else(SessionId::generate);

        req.extensions_mut().insert(session_id);

        let span = tracing::info_span!(
            "http_request",
            session = %session_id,
            method = %req.method(),
            uri = %req.uri(),
        );

        let set_cookie = if existing.is_none() {
            let cookie = format!(
                "{}={session_id}; Path=/; HttpOnly; SameSite=Lax",
                self.cookie_name
            );
            match HeaderValue::from_str(&cookie) {
                Ok(value) => Some(value),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        cookie = %self.cookie_name,
                        "Cannot set session cookie"
                    );
                    None
                }
            }
        } else {
            None
        };

        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.instrument(span).await?;

            if let Some(value) = set_cookie {
                response.headers_mut().append(header::SET_COOKIE, value);
            }

            Ok(response)
        })
    }
}

/// Find a well-formed session id among the request's `Cookie` headers.
fn session_from_cookies(req: &Request, cookie_name: &str) -> Option<SessionId> {
    req.headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| value.trim().parse().ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Extension, Router};
    use tower::ServiceExt;

    const COOKIE: &str = "sid";

    fn app() -> Router {
        Router::new()
            .route(
                "/test",
                get(|Extension(id): Extension<SessionId>| async move { id.to_string() }),
            )
            .layer(session_layer(COOKIE))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_session_minted_if_missing() {
        let request = axum::http::Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("Set-Cookie header should be present")
            .to_str()
            .unwrap()
            .to_string();
        let body = body_text(response).await;

        assert!(cookie.starts_with(&format!("{COOKIE}={body};")));
        assert!(cookie.contains("HttpOnly"));
        assert!(body.parse::<SessionId>().is_ok());
    }

    #[tokio::test]
    async fn test_session_preserved_from_cookie() {
        let id = SessionId::generate();
        let request = axum::http::Request::builder()
            .uri("/test")
            .header(header::COOKIE, format!("theme=dark; {COOKIE}={id}"))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(body_text(response).await, id.to_string());
    }

    #[tokio::test]
    async fn test_invalid_session_replaced() {
        let request = axum::http::Request::builder()
            .uri("/test")
            .header(header::COOKIE, format!("{COOKIE}=not-a-uuid"))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_some());
        let body = body_text(response).await;
        assert_ne!(body, "not-a-uuid");
        assert!(body.parse::<SessionId>().is_ok());
    }
}

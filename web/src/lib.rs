//! Axum front end for session lists.
//!
//! This crate is the imperative shell around the lists reducer:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, session cookie
//! │  - Request parsing, name trimming       │  ← Per-session store lookup
//! │  - Response views and notices           │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - ListsReducer over ListStore          │  ← Validation, ids, ordering
//! │  - Events describing each outcome       │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **Session layer** reads or mints the session id
//! 2. **`CurrentSession`** finds the session's `Store`, creating it only for
//!    requests that change something
//! 3. **Handler** trims input and builds a `ListsCommand`
//! 4. **Store** reduces it, one command at a time per session
//! 5. **Event** is mapped to a view plus notice, or a rejection to `AppError`
//!
//! # Example
//!
//! ```no_run
//! use session_lists_web::{build_router, AppState, Config};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//! axum::serve(listener, build_router(AppState::new(config))).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod notices;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::{Config, ConfigError};
pub use error::AppError;
pub use extractors::CurrentSession;
pub use middleware::session_layer;
pub use router::build_router;
pub use session::{ListsStore, SessionId, SessionRegistry};
pub use state::AppState;

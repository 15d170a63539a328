//! Application state for Axum handlers.

use crate::config::Config;
use crate::session::SessionRegistry;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Stores for the live sessions
    pub sessions: Arc<SessionRegistry>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state with an empty session registry bounded by
    /// the configured session limits.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new(
                config.session_capacity,
                config.session_idle_timeout(),
            )),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn clones_share_the_registry() {
        let state = AppState::default();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.sessions, &clone.sessions));
    }
}

//! # Session Lists Runtime
//!
//! The Store runtime that owns one reducer state and serializes every action
//! sent to it.
//!
//! ## Core Components
//!
//! - **Store**: holds state behind a lock, runs the reducer, and hands the
//!   emitted events back to the caller
//!
//! One `Store` per session means at most one command is reduced against a
//! session's state at any moment; concurrent senders queue on the lock.
//!
//! ## Example
//!
//! ```
//! use session_lists::{ListStore, ListsCommand, ListsEvent, ListsReducer};
//! use session_lists_runtime::Store;
//!
//! # tokio_test::block_on(async {
//! let store = Store::new(ListStore::new(), ListsReducer::new(), ());
//!
//! let events = store
//!     .send(ListsCommand::CreateList { name: "Work".to_string() })
//!     .await;
//! assert!(matches!(events.as_slice(), [ListsEvent::ListCreated { .. }]));
//!
//! let count = store.state(ListStore::len).await;
//! assert_eq!(count, 1);
//! # });
//! ```

use session_lists_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// The Store - runtime coordinator for one reducer state
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: RwLock<S>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: RwLock::new(initial_state),
            reducer,
            environment,
        }
    }

    /// Send an action through the reducer
    ///
    /// Holds the write lock for the whole reduction, so actions sent to the
    /// same store are applied one at a time in arrival order.
    ///
    /// # Returns
    ///
    /// The events the reducer emitted, in order
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Vec<R::Event> {
        metrics::counter!("store.actions.processed").increment(1);

        let effects = {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");
            self.reducer.reduce(&mut *state, action, &self.environment)
        };

        tracing::trace!("Reducer returned {} effects", effects.len());

        let events: Vec<R::Event> = effects.into_iter().map(Effect::into_event).collect();
        metrics::counter!("store.events.emitted").increment(events.len() as u64);
        events
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let list_count = store.state(|s| s.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&*state)
    }

    /// Consume the store and return its state
    pub fn into_state(self) -> S {
        self.state.into_inner()
    }
}

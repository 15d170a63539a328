//! Per-session list stores.
//!
//! Each browser session gets its own [`ListsStore`], created empty the first
//! time the session changes something. Sessions never share state.
//!
//! The registry is bounded: a session idle for longer than the configured
//! timeout is dropped, and when the registry is full the least recently used
//! session makes room for a new one.

use session_lists::{ListStore, ListsCommand, ListsReducer};
use session_lists_runtime::Store;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

/// The runtime store holding one session's lists.
pub type ListsStore = Store<ListStore, ListsCommand, (), ListsReducer>;

/// Default maximum number of live sessions.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Default idle time after which a session is dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Opaque session identifier carried in the session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Mint a fresh random session id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

struct Entry {
    store: Arc<ListsStore>,
    last_seen: Instant,
}

/// Maps session ids to their stores.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, Entry>>,
    capacity: usize,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionRegistry {
    /// Create an empty registry holding at most `capacity` sessions (at
    /// least one), each dropped after `idle_timeout` without use.
    #[must_use]
    pub fn new(capacity: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            idle_timeout,
        }
    }

    /// Return the session's store if it has one.
    ///
    /// Never creates a store, so read-only requests cost nothing to keep.
    pub async fn get(&self, id: SessionId) -> Option<Arc<ListsStore>> {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();

        if sessions.get(&id).is_some_and(|entry| self.is_idle(entry, now)) {
            sessions.remove(&id);
            record_evictions(1);
            return None;
        }

        sessions.get_mut(&id).map(|entry| {
            entry.last_seen = now;
            Arc::clone(&entry.store)
        })
    }

    /// Return the session's store, creating an empty one on first use.
    ///
    /// Creating a store first drops idle sessions, then the least recently
    /// used ones while the registry is full.
    pub async fn get_or_create(&self, id: SessionId) -> Arc<ListsStore> {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();

        if let Some(entry) = sessions.get_mut(&id) {
            if !self.is_idle(entry, now) {
                entry.last_seen = now;
                return Arc::clone(&entry.store);
            }
        }

        self.make_room(&mut sessions, now);

        tracing::debug!(session = %id, "Starting new session store");
        metrics::counter!("sessions.created").increment(1);
        let store = Arc::new(Store::new(ListStore::new(), ListsReducer::new(), ()));
        sessions.insert(
            id,
            Entry {
                store: Arc::clone(&store),
                last_seen: now,
            },
        );
        store
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Whether no session is live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    fn is_idle(&self, entry: &Entry, now: Instant) -> bool {
        now.saturating_duration_since(entry.last_seen) >= self.idle_timeout
    }

    fn make_room(&self, sessions: &mut HashMap<SessionId, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_idle(entry, now));

        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        record_evictions(before - sessions.len());
    }
}

fn record_evictions(count: usize) {
    if count > 0 {
        tracing::debug!(count, "Evicted sessions");
        metrics::counter!("sessions.evicted").increment(count as u64);
    }
}

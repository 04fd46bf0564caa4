//! Session persistence
//!
//! [`KvStore`] is the raw key-value backend with expiry, implemented by
//! [`SqliteStore`] and [`MemoryStore`]. [`SessionStore`] sits on top and is
//! the boundary the dialog talks to: it never returns an error, it logs.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::dialog::Session;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Idle time after which a session disappears
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(1800);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Which backend is serving sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Sqlite,
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Sqlite => "sqlite",
            StoreKind::Memory => "memory",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(StoreKind::Sqlite),
            "memory" => Some(StoreKind::Memory),
            _ => None,
        }
    }
}

/// Key-value storage with per-entry expiry
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Value for `key`, or `None` if absent or expired
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Insert or replace `key`, expiring after `ttl`
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Drop expired entries, returning how many were removed
    async fn sweep_expired(&self) -> StoreResult<usize>;

    fn kind(&self) -> StoreKind;
}

/// Backend selection, read from the environment at startup
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub db_path: PathBuf,
    pub memory_capacity: usize,
}

/// Open the configured backend. A SQLite backend that cannot be opened
/// degrades to the in-process store.
pub fn open(config: &StoreConfig) -> Arc<dyn KvStore> {
    match config.kind {
        StoreKind::Memory => {
            tracing::info!(capacity = config.memory_capacity, "Using in-process session store");
            Arc::new(MemoryStore::new(config.memory_capacity))
        }
        StoreKind::Sqlite => match SqliteStore::open(&config.db_path) {
            Ok(store) => {
                tracing::info!(path = %config.db_path.display(), "Opened session store");
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!(
                    path = %config.db_path.display(),
                    error = %e,
                    "Session store unavailable, falling back to in-process store; sessions will not survive a restart"
                );
                Arc::new(MemoryStore::new(config.memory_capacity))
            }
        },
    }
}

/// Periodically remove expired entries from `store`.
pub fn spawn_sweeper(store: Arc<dyn KvStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            match store.sweep_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "Swept expired sessions"),
                Err(e) => tracing::warn!(error = %e, "Session sweep failed"),
            }
        }
    })
}

/// Storage key for a session id
pub fn session_key(session_id: &str) -> String {
    format!("session:{session_id}")
}

/// Typed, infallible session access over a [`KvStore`]
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KvStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KvStore>) -> Self {
        Self { backend }
    }

    pub fn kind(&self) -> StoreKind {
        self.backend.kind()
    }

    /// Stored session, or `None` when absent, expired or unreadable
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let key = session_key(session_id);
        let raw = match self.backend.get(&key).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read session");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable session");
                None
            }
        }
    }

    /// Persist `session`; failures are logged and swallowed
    pub async fn put(&self, session_id: &str, session: &Session, ttl: Duration) {
        let key = session_key(session_id);
        let result = match serde_json::to_string(session) {
            Ok(raw) => self.backend.put(&key, &raw, ttl).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            tracing::warn!(key = %key, error = %e, "Failed to save session");
        }
    }

    /// Remove a session; failures are logged and swallowed
    pub async fn delete(&self, session_id: &str) {
        let key = session_key(session_id);
        if let Err(e) = self.backend.delete(&key).await {
            tracing::warn!(key = %key, error = %e, "Failed to delete session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogState;

    /// Backend that fails every call
    struct BrokenStore;

    #[async_trait]
    impl KvStore for BrokenStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Poisoned)
        }
        async fn put(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<()> {
            Err(StoreError::Poisoned)
        }
        async fn delete(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Poisoned)
        }
        async fn sweep_expired(&self) -> StoreResult<usize> {
            Err(StoreError::Poisoned)
        }
        fn kind(&self) -> StoreKind {
            StoreKind::Sqlite
        }
    }

    #[test]
    fn test_session_key_layout() {
        assert_eq!(session_key("ATUid_123"), "session:ATUid_123");
    }

    #[test]
    fn test_store_kind_parse() {
        assert_eq!(StoreKind::parse("SQLite"), Some(StoreKind::Sqlite));
        assert_eq!(StoreKind::parse(" memory "), Some(StoreKind::Memory));
        assert_eq!(StoreKind::parse("redis"), None);
    }

    #[tokio::test]
    async fn test_session_roundtrip_through_memory() {
        let store = SessionStore::new(Arc::new(MemoryStore::new(8)));
        let mut session = Session::new("s1", "+250");
        session.state = DialogState::HeightInput;
        session.inputs.mass_kg = Some(70.0);

        store.put("s1", &session, DEFAULT_SESSION_TTL).await;
        assert_eq!(store.get("s1").await, Some(session));

        store.delete("s1").await;
        assert_eq!(store.get("s1").await, None);
    }

    #[tokio::test]
    async fn test_backend_failures_do_not_escape() {
        let store = SessionStore::new(Arc::new(BrokenStore));
        let session = Session::new("s1", "+250");
        store.put("s1", &session, DEFAULT_SESSION_TTL).await;
        assert_eq!(store.get("s1").await, None);
        store.delete("s1").await;
    }

    #[tokio::test]
    async fn test_undecodable_session_reads_as_absent() {
        let backend = Arc::new(MemoryStore::new(8));
        backend
            .put(&session_key("s1"), "{not json", DEFAULT_SESSION_TTL)
            .await
            .unwrap();
        let store = SessionStore::new(backend);
        assert_eq!(store.get("s1").await, None);
    }

    #[test]
    fn test_unopenable_sqlite_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = StoreConfig {
            kind: StoreKind::Sqlite,
            db_path: blocker.join("sessions.db"),
            memory_capacity: 4,
        };
        assert_eq!(open(&config).kind(), StoreKind::Memory);
    }

    #[test]
    fn test_open_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            kind: StoreKind::Sqlite,
            db_path: dir.path().join("nested").join("sessions.db"),
            memory_capacity: 4,
        };
        assert_eq!(open(&config).kind(), StoreKind::Sqlite);
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let backend = Arc::new(MemoryStore::new(8));
        backend.put("a", "1", Duration::ZERO).await.unwrap();
        backend.put("b", "2", DEFAULT_SESSION_TTL).await.unwrap();
        let handle = spawn_sweeper(backend.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();
        assert_eq!(backend.len(), 1);
    }
}

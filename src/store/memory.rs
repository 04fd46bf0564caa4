//! Bounded in-process store
//!
//! Used when configured, and as the fallback when SQLite cannot be opened.
//! Nothing survives a restart.

use super::{KvStore, StoreError, StoreKind, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// Upper bound applied to absurd TTLs so `Instant` arithmetic cannot overflow
const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Mutex-guarded map holding at most `capacity` entries
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }
}

/// Make room for one more key: expired entries go first, then whichever
/// live entry expires soonest.
fn make_room(entries: &mut HashMap<String, Entry>, capacity: usize, now: Instant) {
    if entries.len() < capacity {
        return;
    }
    entries.retain(|_, entry| entry.is_live(now));
    while entries.len() >= capacity {
        let Some(victim) = entries
            .iter()
            .min_by_key(|(_, entry)| entry.expires_at)
            .map(|(key, _)| key.clone())
        else {
            break;
        };
        tracing::debug!(key = %victim, "Evicting session to stay within capacity");
        entries.remove(&victim);
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        if !entries.contains_key(key) {
            make_room(&mut entries, self.capacity, now);
        }
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now + ttl.min(MAX_TTL),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn sweep_expired(&self) -> StoreResult<usize> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        Ok(before - entries.len())
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = MemoryStore::new(4);
        store.put("k", "v1", HOUR).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v1"));

        store.put("k", "v2", HOUR).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

        store.delete("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
        // deleting again is fine
        store.delete("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_entries_are_invisible() {
        let store = MemoryStore::new(4);
        store.put("gone", "v", Duration::ZERO).await.unwrap();
        assert_eq!(store.get("gone").await.unwrap(), None);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_sweep_counts_removed() {
        let store = MemoryStore::new(8);
        store.put("a", "1", Duration::ZERO).await.unwrap();
        store.put("b", "2", Duration::ZERO).await.unwrap();
        store.put("c", "3", HOUR).await.unwrap();
        assert_eq!(store.sweep_expired().await.unwrap(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.sweep_expired().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_capacity_evicts_soonest_expiry() {
        let store = MemoryStore::new(2);
        store.put("short", "1", Duration::from_secs(10)).await.unwrap();
        store.put("long", "2", HOUR).await.unwrap();
        store.put("new", "3", HOUR).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("short").await.unwrap(), None);
        assert!(store.get("long").await.unwrap().is_some());
        assert!(store.get("new").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_overwrite_at_capacity_does_not_evict() {
        let store = MemoryStore::new(2);
        store.put("a", "1", HOUR).await.unwrap();
        store.put("b", "2", HOUR).await.unwrap();
        store.put("a", "3", HOUR).await.unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get("b").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_huge_ttl_is_clamped() {
        let store = MemoryStore::new(1);
        store.put("k", "v", Duration::MAX).await.unwrap();
        assert!(store.get("k").await.unwrap().is_some());
    }
}

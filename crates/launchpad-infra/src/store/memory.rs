//! In-memory store - used for development and when Redis is unavailable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use launchpad_core::ports::{KeyValueStore, StoreError};

/// How often `put` drops entries whose TTL has passed.
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

struct Entries {
    map: HashMap<String, Entry>,
    next_sweep: Instant,
}

/// In-memory store using a HashMap behind an async RwLock.
///
/// Expired entries are dropped when read, and writes sweep the whole map at
/// most once per sweep interval so keys that are never read again do not
/// pile up. Data is lost on restart and is not shared between instances, so
/// rate limits are per process here.
pub struct InMemoryStore {
    entries: RwLock<Entries>,
    sweep_interval: Duration,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_sweep_interval(DEFAULT_SWEEP_INTERVAL)
    }

    pub fn with_sweep_interval(sweep_interval: Duration) -> Self {
        Self {
            entries: RwLock::new(Entries {
                map: HashMap::new(),
                next_sweep: Instant::now() + sweep_interval,
            }),
            sweep_interval,
        }
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.map.values().filter(|e| !e.is_expired(now)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    #[cfg(test)]
    async fn slots(&self) -> usize {
        self.entries.read().await.map.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        let Some(entry) = entries.map.get(key) else {
            return Ok(None);
        };

        if entry.is_expired(now) {
            drop(entries);
            let mut entries = self.entries.write().await;
            // Re-check: a writer may have refreshed the key in between.
            if entries.map.get(key).is_some_and(|e| e.is_expired(now)) {
                entries.map.remove(key);
            }
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if now >= entries.next_sweep {
            let before = entries.map.len();
            entries.map.retain(|_, e| !e.is_expired(now));
            entries.next_sweep = now + self.sweep_interval;
            tracing::debug!(
                swept = before - entries.map.len(),
                live = entries.map.len(),
                "Swept expired in-memory entries"
            );
        }

        entries.map.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|d| now + d),
            },
        );
        Ok(())
    }
}

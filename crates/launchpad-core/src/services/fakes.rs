//! Test doubles for the ports.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::SignupEvent;
use crate::ports::{KeyValueStore, Notifier, NotifyError, StoreError};

/// HashMap store that remembers the TTL each key was written with.
#[derive(Default)]
pub struct FakeStore {
    entries: Mutex<HashMap<String, (String, Option<Duration>)>>,
    puts: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn ttl_of(&self, key: &str) -> Option<Option<Duration>> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for FakeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }
}

/// Store that fails reads, writes, or both, for keys under a prefix.
/// Everything else is delegated to an inner [`FakeStore`].
pub struct FaultyStore {
    inner: FakeStore,
    prefix: &'static str,
    fail_reads: bool,
    fail_writes: bool,
}

impl FaultyStore {
    pub fn failing_reads() -> Self {
        Self::on_prefix("", true, false)
    }

    pub fn failing_writes() -> Self {
        Self::on_prefix("", false, true)
    }

    pub fn on_prefix(prefix: &'static str, fail_reads: bool, fail_writes: bool) -> Self {
        Self {
            inner: FakeStore::new(),
            prefix,
            fail_reads,
            fail_writes,
        }
    }

    pub fn inner(&self) -> &FakeStore {
        &self.inner
    }
}

#[async_trait]
impl KeyValueStore for FaultyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads && key.starts_with(self.prefix) {
            return Err(StoreError::Connection("read refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        if self.fail_writes && key.starts_with(self.prefix) {
            return Err(StoreError::Operation("write refused".to_string()));
        }
        self.inner.put(key, value, ttl).await
    }
}

/// Notifier that records every event and optionally fails.
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<SignupEvent>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<SignupEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, event: &SignupEvent) -> Result<(), NotifyError> {
        self.events.lock().unwrap().push(event.clone());
        if self.fail {
            return Err(NotifyError::Rejected(502));
        }
        Ok(())
    }
}

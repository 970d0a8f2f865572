use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Key-value store - abstraction over storage backends (Redis, in-memory).
///
/// Values are JSON documents kept as strings. Implementations only need the
/// two primitive operations; typed access comes from [`JsonStoreExt`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`, if any and not expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, evicting it after `ttl` when given.
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError>;
}

/// Store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

/// Typed JSON access on top of any [`KeyValueStore`].
#[async_trait]
pub trait JsonStoreExt {
    async fn get_json<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + Send;

    async fn put_json<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<(), StoreError>
    where
        T: Serialize + Sync;
}

#[async_trait]
impl<S> JsonStoreExt for S
where
    S: KeyValueStore + ?Sized,
{
    async fn get_json<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn put_json<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let raw =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.put(key, &raw, ttl).await
    }
}

//! Fixed-window rate limiter backed by a key-value store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::RateBucket;
use crate::ports::{JsonStoreExt, KeyValueStore, RateLimitResult, RateLimiter};

/// Rate limiter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Maximum admissions per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
    /// TTL of the stored bucket. Must outlive the window.
    pub retention: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60 * 60),
            retention: Duration::from_secs(2 * 60 * 60),
        }
    }
}

impl RateLimitPolicy {
    /// Raise `retention` to twice the window when it would let a live bucket
    /// be evicted early.
    pub fn validated(mut self) -> Self {
        if self.retention <= self.window {
            tracing::warn!(
                retention_secs = self.retention.as_secs(),
                window_secs = self.window.as_secs(),
                "Rate limit retention does not exceed the window, using twice the window"
            );
            self.retention = self.window * 2;
        }
        self
    }
}

/// Fixed-window counter keyed by client identity.
///
/// Each identity gets a `rate:<identity>` bucket holding the window start and
/// the number of admissions so far. Windows are anchored at the first request
/// after the previous window expired, not at wall-clock boundaries, and a
/// client may spend a full quota on each side of a boundary.
///
/// The read-then-write sequence is not atomic: two concurrent first requests
/// can both see an empty bucket and both be admitted. Store failures fail
/// open in both directions.
pub struct FixedWindowLimiter {
    store: Arc<dyn KeyValueStore>,
    policy: RateLimitPolicy,
    window: chrono::Duration,
}

impl FixedWindowLimiter {
    pub fn new(store: Arc<dyn KeyValueStore>, policy: RateLimitPolicy) -> Self {
        let policy = policy.validated();
        let window = chrono::Duration::from_std(policy.window)
            .unwrap_or_else(|_| chrono::Duration::weeks(52 * 100));

        Self {
            store,
            policy,
            window,
        }
    }

    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    fn bucket_key(identity: &str) -> String {
        format!("rate:{identity}")
    }

    async fn load_bucket(&self, key: &str, now: DateTime<Utc>) -> RateBucket {
        let loaded: Result<Option<RateBucket>, _> = self.store.get_json(key).await;
        match loaded {
            Ok(Some(bucket)) if !bucket.is_expired(now, self.window) => bucket,
            Ok(_) => RateBucket::open(now),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Rate bucket unreadable, failing open");
                RateBucket::open(now)
            }
        }
    }
}

#[async_trait]
impl RateLimiter for FixedWindowLimiter {
    async fn check_and_increment(&self, identity: &str, now: DateTime<Utc>) -> RateLimitResult {
        let key = Self::bucket_key(identity);
        let bucket = self.load_bucket(&key, now).await;
        let reset_after = bucket
            .remaining_window(now, self.window)
            .to_std()
            .unwrap_or_default();

        if bucket.count >= self.policy.max_requests {
            tracing::debug!(identity = %identity, count = bucket.count, "Rate limit exhausted");
            return RateLimitResult {
                admitted: false,
                remaining: 0,
                reset_after,
            };
        }

        let bucket = RateBucket {
            count: bucket.count + 1,
            ..bucket
        };

        if let Err(e) = self
            .store
            .put_json(&key, &bucket, Some(self.policy.retention))
            .await
        {
            tracing::warn!(key = %key, error = %e, "Failed to record rate bucket, admitting anyway");
        }

        RateLimitResult {
            admitted: true,
            remaining: self.policy.max_requests.saturating_sub(bucket.count),
            reset_after,
        }
    }
}

//! Rate limiting port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Rate limiter trait - abstraction over rate limiting strategies.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check whether `identity` may proceed at `now` and count the attempt.
    ///
    /// Infallible: backends that cannot answer must fail open.
    async fn check_and_increment(&self, identity: &str, now: DateTime<Utc>) -> RateLimitResult;
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub admitted: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

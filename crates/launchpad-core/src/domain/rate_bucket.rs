use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Fixed-window admission counter for one client identity.
///
/// Stored as `{"ts": <window start, ms>, "count": <n>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBucket {
    #[serde(rename = "ts")]
    pub window_start: i64,
    pub count: u32,
}

impl RateBucket {
    /// A fresh window opening at `now`.
    pub fn open(now: DateTime<Utc>) -> Self {
        Self {
            window_start: now.timestamp_millis(),
            count: 0,
        }
    }

    /// Whether `now` is past the end of this bucket's window.
    ///
    /// The boundary itself still belongs to the window. A bucket opened more
    /// than one window in the future can only come from a bad write and is
    /// treated as expired.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        let window = window.num_milliseconds();
        let elapsed = now.timestamp_millis().saturating_sub(self.window_start);
        elapsed > window || elapsed < window.saturating_neg()
    }

    /// Time left until the window closes, between zero and `window`.
    pub fn remaining_window(&self, now: DateTime<Utc>, window: Duration) -> Duration {
        let window = window.num_milliseconds().max(0);
        let closes_at = self.window_start.saturating_add(window);
        let left = closes_at.saturating_sub(now.timestamp_millis());
        Duration::milliseconds(left.clamp(0, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_layout() {
        let bucket = RateBucket {
            window_start: 1_700_000_000_000,
            count: 3,
        };
        let json = serde_json::to_value(bucket).unwrap();
        assert_eq!(json, serde_json::json!({"ts": 1_700_000_000_000_i64, "count": 3}));
    }

    #[test]
    fn test_expiry_is_exclusive_of_boundary() {
        let start = Utc::now();
        let bucket = RateBucket::open(start);
        let window = Duration::hours(1);

        assert!(!bucket.is_expired(start + window, window));
        assert!(bucket.is_expired(start + window + Duration::milliseconds(1), window));
    }

    #[test]
    fn test_remaining_window_saturates() {
        let start = Utc::now();
        let bucket = RateBucket::open(start);
        let window = Duration::minutes(10);

        assert_eq!(
            bucket.remaining_window(start + Duration::minutes(4), window),
            Duration::minutes(6)
        );
        assert_eq!(
            bucket.remaining_window(start + Duration::minutes(15), window),
            Duration::zero()
        );
    }

    #[test]
    fn test_extreme_window_start_does_not_overflow() {
        let now = Utc::now();
        let window = Duration::hours(1);

        let ancient = RateBucket {
            window_start: i64::MIN,
            count: 3,
        };
        assert!(ancient.is_expired(now, window));
        assert_eq!(ancient.remaining_window(now, window), Duration::zero());

        let far_future = RateBucket {
            window_start: i64::MAX,
            count: 3,
        };
        assert!(far_future.is_expired(now, window));
        assert_eq!(far_future.remaining_window(now, window), window);
    }
}

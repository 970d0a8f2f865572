use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A captured email address. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    /// Creation time, ms since epoch.
    #[serde(rename = "ts")]
    pub timestamp: i64,
}

impl SignupRecord {
    /// Create a record for an already-normalised email.
    pub fn new(email: String, now: DateTime<Utc>) -> Self {
        Self {
            email,
            timestamp: now.timestamp_millis(),
        }
    }
}

/// Payload forwarded to the signup webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupEvent {
    pub email: String,
    /// RFC 3339 timestamp with millisecond precision.
    pub ts: String,
}

impl SignupEvent {
    pub fn new(email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            ts: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_layout() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let record = SignupRecord::new("user@example.com".to_string(), now);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"email": "user@example.com", "ts": 1_700_000_000_123_i64})
        );
    }

    #[test]
    fn test_event_uses_iso_timestamp() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let event = SignupEvent::new("user@example.com", at);
        assert_eq!(event.ts, "2023-11-14T22:13:20.123Z");
    }
}

//! Signup registration: validate, rate limit, dedupe, persist, notify.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::{SignupEvent, SignupRecord, is_valid_email, normalize_email};
use crate::error::RegistrarError;
use crate::input::SignupFields;
use crate::ports::{Delivery, JsonStoreExt, KeyValueStore, Notifier, RateLimiter};

/// What happened to a signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Registered,
    /// The email was already on the list. Not an error.
    AlreadyRegistered,
    InvalidEmail,
    RateLimited { retry_after: Duration },
}

/// Records signups, one per normalised email address.
///
/// Dedupe is a plain lookup followed by a write, so two concurrent signups
/// for the same new address may both write. The second write stores the same
/// email with a later timestamp.
pub struct SignupRegistrar {
    store: Arc<dyn KeyValueStore>,
    limiter: Arc<dyn RateLimiter>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl SignupRegistrar {
    pub fn new(store: Arc<dyn KeyValueStore>, limiter: Arc<dyn RateLimiter>) -> Self {
        Self {
            store,
            limiter,
            notifier: None,
        }
    }

    /// Forward fresh signups to `notifier` on a best-effort basis.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    fn record_key(email: &str) -> String {
        format!("email:{email}")
    }

    /// Run one signup attempt for the client `identity`.
    ///
    /// Only store failures during the dedupe lookup or the record write are
    /// errors; a rate limiter or notifier that cannot reach its backend
    /// degrades instead.
    pub async fn register(
        &self,
        fields: &SignupFields,
        identity: &str,
        now: DateTime<Utc>,
    ) -> Result<SignupOutcome, RegistrarError> {
        let email = normalize_email(fields.text("email").unwrap_or_default());
        if !is_valid_email(&email) {
            return Ok(SignupOutcome::InvalidEmail);
        }

        let quota = self.limiter.check_and_increment(identity, now).await;
        if !quota.admitted {
            tracing::info!(identity = %identity, "Signup rate limited");
            return Ok(SignupOutcome::RateLimited {
                retry_after: quota.reset_after,
            });
        }

        let key = Self::record_key(&email);
        if self.store.get(&key).await?.is_some() {
            tracing::debug!(key = %key, "Email already registered");
            return Ok(SignupOutcome::AlreadyRegistered);
        }

        let record = SignupRecord::new(email, now);
        self.store.put_json(&key, &record, None).await?;
        tracing::info!(key = %key, "Signup recorded");

        match self.forward(SignupEvent::new(record.email, now)).await {
            Delivery::Sent => tracing::debug!(key = %key, "Signup forwarded to webhook"),
            Delivery::Skipped => {}
            Delivery::Failed(e) => {
                tracing::warn!(key = %key, error = %e, "Signup webhook failed, record kept")
            }
        }

        Ok(SignupOutcome::Registered)
    }

    /// Fire-and-forget notification. Never retried and never fatal.
    async fn forward(&self, event: SignupEvent) -> Delivery {
        let Some(notifier) = &self.notifier else {
            return Delivery::Skipped;
        };

        match notifier.notify(&event).await {
            Ok(()) => Delivery::Sent,
            Err(e) => Delivery::Failed(e),
        }
    }
}

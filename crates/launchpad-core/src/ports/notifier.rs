//! Outbound notification port.

use async_trait::async_trait;

use crate::domain::SignupEvent;

/// Something that wants to hear about fresh signups (a webhook, a CRM).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, event: &SignupEvent) -> Result<(), NotifyError>;
}

/// Notification errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Destination rejected notification with status {0}")]
    Rejected(u16),
}

/// Outcome of a best-effort notification. Informational only: callers log it
/// and move on.
#[derive(Debug)]
#[must_use = "log the delivery outcome, even though it is never acted on"]
pub enum Delivery {
    Sent,
    Skipped,
    Failed(NotifyError),
}

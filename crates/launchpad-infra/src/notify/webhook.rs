//! Webhook notifier - POSTs each fresh signup as JSON to a configured URL.

use async_trait::async_trait;

use launchpad_core::domain::SignupEvent;
use launchpad_core::ports::{Notifier, NotifyError};

/// Sends `{"email": ..., "ts": ...}` to a webhook (Zapier, Slack relay, CRM).
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, event: &SignupEvent) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(event)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}

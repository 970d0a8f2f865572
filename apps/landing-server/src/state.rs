//! Application state - shared across all handlers.

use std::sync::Arc;

use launchpad_core::ports::{KeyValueStore, Notifier, StoreError};
use launchpad_core::{FixedWindowLimiter, SignupRegistrar};
use launchpad_infra::InMemoryStore;

#[cfg(feature = "redis")]
use launchpad_infra::{RedisConfig, RedisStore};
#[cfg(feature = "webhook")]
use launchpad_infra::WebhookNotifier;

use crate::config::{AppConfig, SiteConfig, StoreConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<SignupRegistrar>,
    pub site: Arc<SiteConfig>,
    pub trusted_ip_header: Arc<str>,
}

impl AppState {
    /// Build the application state with the configured store and notifier.
    pub async fn new(config: &AppConfig) -> Result<Self, StoreError> {
        let store = build_store(&config.store).await?;
        let notifier = build_notifier(config);

        Ok(Self::with_backends(config, store, notifier))
    }

    /// Assemble state around explicit backends.
    pub fn with_backends(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Self {
        let limiter = Arc::new(FixedWindowLimiter::new(
            store.clone(),
            config.signup.rate_limit.clone(),
        ));

        let mut registrar = SignupRegistrar::new(store, limiter);
        if let Some(notifier) = notifier {
            registrar = registrar.with_notifier(notifier);
        }

        Self {
            registrar: Arc::new(registrar),
            site: Arc::new(config.site.clone()),
            trusted_ip_header: Arc::from(config.signup.trusted_ip_header.as_str()),
        }
    }
}

async fn build_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    #[cfg(feature = "redis")]
    {
        if let Some(url) = &config.redis_url {
            let redis = RedisConfig {
                url: url.clone(),
                connect_timeout: config.connect_timeout,
                fallback_to_memory: config.fallback_to_memory,
            };

            match RedisStore::new(&redis).await {
                Ok(store) => return Ok(Arc::new(store)),
                Err(e) if redis.fallback_to_memory => {
                    tracing::error!(error = %e, "Failed to connect to Redis. Using in-memory fallback.");
                }
                Err(e) => return Err(e),
            }
        }
    }

    #[cfg(not(feature = "redis"))]
    {
        if config.redis_url.is_some() {
            tracing::warn!("REDIS_URL set but the redis feature is disabled. Using in-memory store.");
        }
    }

    tracing::info!("Using in-memory store - signups are lost on restart");
    Ok(Arc::new(InMemoryStore::new()))
}

#[cfg(feature = "webhook")]
fn build_notifier(config: &AppConfig) -> Option<Arc<dyn Notifier>> {
    let url = config.signup.webhook_url.as_ref()?;
    tracing::info!("Signup webhook configured");
    Some(Arc::new(WebhookNotifier::new(url.clone())))
}

#[cfg(not(feature = "webhook"))]
fn build_notifier(config: &AppConfig) -> Option<Arc<dyn Notifier>> {
    if config.signup.webhook_url.is_some() {
        tracing::warn!("SIGNUP_WEBHOOK_URL set but the webhook feature is disabled");
    }
    None
}

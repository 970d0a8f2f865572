//! # Launchpad Infrastructure
//!
//! Concrete implementations of the ports defined in `launchpad-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `redis` - Redis-backed key-value store
//! - `webhook` - HTTP webhook notifier via reqwest

pub mod notify;
pub mod store;

// Re-exports - In-Memory
pub use store::InMemoryStore;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use store::{RedisConfig, RedisStore};

// Re-exports - Webhook
#[cfg(feature = "webhook")]
pub use notify::WebhookNotifier;

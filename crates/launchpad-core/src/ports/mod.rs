//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod notifier;
mod rate_limit;
mod store;

pub use notifier::{Delivery, Notifier, NotifyError};
pub use rate_limit::{RateLimitResult, RateLimiter};
pub use store::{JsonStoreExt, KeyValueStore, StoreError};

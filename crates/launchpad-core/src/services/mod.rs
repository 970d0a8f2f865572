//! Services - the signup workflow built on top of the ports.

mod rate_limiter;
mod registrar;

#[cfg(test)]
mod fakes;

pub use rate_limiter::{FixedWindowLimiter, RateLimitPolicy};
pub use registrar::{SignupOutcome, SignupRegistrar};

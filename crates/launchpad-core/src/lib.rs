//! # Launchpad Core
//!
//! The domain layer of the Launchpad coming-soon service.
//! Email validation, the fixed-window rate limiter and the signup registrar
//! live here, written against the ports in [`ports`] so that any store or
//! notifier can be plugged in.

pub mod domain;
pub mod error;
pub mod input;
pub mod ports;
pub mod services;

pub use error::RegistrarError;
pub use input::SignupFields;
pub use services::{FixedWindowLimiter, SignupOutcome, SignupRegistrar};

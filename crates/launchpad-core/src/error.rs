//! Service-level error types.

use thiserror::Error;

use crate::ports::StoreError;

/// Faults the signup registrar cannot degrade around.
///
/// Invalid input and exhausted quotas are ordinary outcomes, see
/// [`SignupOutcome`](crate::services::SignupOutcome).
#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("Signup store unavailable: {0}")]
    Store(#[from] StoreError),
}

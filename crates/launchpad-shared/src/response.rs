//! JSON envelope returned by `POST /api/signup`.

use serde::{Deserialize, Serialize};

/// Error code for a malformed email address.
pub const INVALID_EMAIL: &str = "invalid_email";
/// Error code for an exhausted signup quota.
pub const RATE_LIMITED: &str = "rate_limited";
/// Error code for an unexpected fault.
pub const SERVER_ERROR: &str = "server_error";
/// Message attached to a duplicate signup.
pub const ALREADY_SIGNED_UP: &str = "already_signed_up";

/// `{ok, error?, message?, detail?}` - the only shape the signup API speaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SignupResponse {
    fn failure(error: &str) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
            message: None,
            detail: None,
        }
    }

    pub fn registered() -> Self {
        Self {
            ok: true,
            error: None,
            message: None,
            detail: None,
        }
    }

    pub fn already_signed_up() -> Self {
        Self {
            message: Some(ALREADY_SIGNED_UP.to_string()),
            ..Self::registered()
        }
    }

    pub fn invalid_email() -> Self {
        Self::failure(INVALID_EMAIL)
    }

    pub fn rate_limited() -> Self {
        Self::failure(RATE_LIMITED)
    }

    pub fn server_error(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::failure(SERVER_ERROR)
        }
    }
}

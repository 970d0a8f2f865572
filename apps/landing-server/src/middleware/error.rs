//! Outermost fault boundary - every unexpected error becomes a 500 envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use launchpad_core::RegistrarError;
use launchpad_shared::SignupResponse;
use std::fmt;

/// Application-level error type that converts to `server_error` responses.
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "Request failed");
        HttpResponse::build(self.status_code()).json(SignupResponse::server_error(self.to_string()))
    }
}

impl From<RegistrarError> for AppError {
    fn from(err: RegistrarError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

//! Auth Error Types
//!
//! Every failure surfaces as an HTTP response with a structured JSON
//! body `{"error": <message>}`; the `#[error]` strings below are the
//! exact bodies clients see. No failure is retried internally.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use platform::SessionError;
use serde_json::json;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login submitted with an empty or whitespace-only field
    #[error("Parameters can't be empty")]
    EmptyCredentials,

    /// Credentials do not match the reference pair
    #[error("Authentication failed")]
    InvalidCredentials,

    /// Logout requested without an authenticated session
    #[error("Invalid session token")]
    SessionMissing,

    /// Protected route reached without an authenticated session
    #[error("unauthorized")]
    Unauthorized,

    /// Session could not be persisted into the response cookie
    #[error("Failed to save session")]
    SessionSave(#[from] SessionError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmptyCredentials | AuthError::SessionMissing => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::SessionSave(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::SessionSave(e) => {
                tracing::error!(error = %e, "Failed to persist session");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

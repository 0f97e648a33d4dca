//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login form fields (`application/x-www-form-urlencoded`)
///
/// Missing fields deserialize as empty strings and fail the same
/// emptiness validation as submitted-but-blank ones.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Success message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Current user response (`/private/me`)
///
/// `user` is the session identity; `null` only if the gate was bypassed
/// somehow, but the handler tolerates it.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: Option<String>,
}

/// Login status response (`/private/status`)
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

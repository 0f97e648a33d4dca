//! HTTP Handlers
//!
//! Each handler reconstructs the client's session explicitly from the
//! request headers via the injected store, and any mutation is followed
//! by an explicit save whose `Set-Cookie` value is attached to the
//! response. A mutation without a save would be lost with the request.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::CookieSessionStore;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, MessageResponse, StatusResponse, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState {
    pub sessions: Arc<CookieSessionStore>,
    pub config: Arc<AuthConfig>,
}

impl AuthAppState {
    pub fn new(config: AuthConfig) -> Self {
        let sessions = CookieSessionStore::new(config.cookie.clone(), config.session_secret);
        Self {
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
    Form(req): Form<LoginRequest>,
) -> AuthResult<impl IntoResponse> {
    if req.username.trim().is_empty() || req.password.trim().is_empty() {
        return Err(AuthError::EmptyCredentials);
    }

    if !state.config.credentials.matches(&req.username, &req.password) {
        return Err(AuthError::InvalidCredentials);
    }

    // Re-authentication overwrites the identity in place; any other
    // session state the client carries survives.
    let mut session = state.sessions.load(&headers);
    session.set(state.config.identity_key.clone(), req.username.clone());
    let cookie = state.sessions.save(&session)?;

    tracing::info!(user = %req.username, "User authenticated");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Successfully authenticated user",
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse> {
    let mut session = state.sessions.load(&headers);

    if !session.delete(&state.config.identity_key) {
        return Err(AuthError::SessionMissing);
    }

    // With the identity gone an otherwise-empty session saves as a
    // removal cookie, clearing the client's state entirely.
    let cookie = state.sessions.save(&session)?;

    tracing::info!("User logged out");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Successfully logged out",
        }),
    ))
}

// ============================================================================
// Protected Handlers
// ============================================================================

/// GET /private/me
///
/// Reachable only through the auth gate, so the identity is expected to
/// be present; a `null` is tolerated rather than treated as an error.
pub async fn me(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
) -> Json<UserResponse> {
    let session = state.sessions.load(&headers);
    let user = session
        .get_str(&state.config.identity_key)
        .map(str::to_owned);

    Json(UserResponse { user })
}

/// GET /private/status
///
/// Reaching this handler at all is the signal; the body is static.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "You are logged in",
    })
}

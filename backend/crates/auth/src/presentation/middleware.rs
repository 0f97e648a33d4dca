//! Auth Gate Middleware
//!
//! The sole enforcement point for protected routes: requests whose
//! session lacks the identity key are answered with 401 before the
//! downstream handler runs. The gate is read-only; it never mutates the
//! session or the request.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires an authenticated session
pub async fn require_session(
    State(state): State<AuthAppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let session = state.sessions.load(req.headers());

    if session.get(&state.config.identity_key).is_none() {
        return Err(AuthError::Unauthorized.into_response());
    }

    Ok(next.run(req).await)
}

//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the auth router.
///
/// `/login` and `/logout` are public; everything under `/private` sits
/// behind the [`require_session`] gate.
pub fn auth_router(config: AuthConfig) -> Router {
    let state = AuthAppState::new(config);

    let private = Router::new()
        .route("/me", get(handlers::me))
        .route("/status", get(handlers::status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", get(handlers::logout))
        .nest("/private", private)
        .with_state(state)
}

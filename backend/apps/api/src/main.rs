//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level failures are handled
//! by `auth::AuthError` inside the router.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use auth::{AuthConfig, Credentials, auth_router};
use axum::Router;
use base64::Engine;
use base64::engine::general_purpose;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,platform=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = auth_config()?;

    // Build router
    let app = Router::new()
        .merge(auth_router(config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the auth configuration from the environment.
///
/// In debug builds everything falls back to development defaults
/// (random secret, insecure cookie, demo credentials). In release
/// builds `SESSION_SECRET` must be set to 32 bytes of standard base64.
fn auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let secret_b64 =
            env::var("SESSION_SECRET").context("SESSION_SECRET must be set in production")?;
        let secret_bytes = general_purpose::STANDARD
            .decode(&secret_b64)
            .context("SESSION_SECRET is not valid base64")?;
        let secret: [u8; 32] = secret_bytes
            .try_into()
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to exactly 32 bytes"))?;

        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    // Demo credentials can be overridden without rebuilding
    if let (Ok(username), Ok(password)) = (env::var("DEMO_USERNAME"), env::var("DEMO_PASSWORD")) {
        config.credentials = Credentials::new(username, password);
    }

    Ok(config)
}

//! Application Configuration
//!
//! Everything the handlers need is carried here and injected at router
//! construction; there are no process-wide constants.

use platform::cookie::CookieConfig;
use platform::crypto;

use crate::application::credentials::Credentials;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session key whose presence signals "authenticated"
    pub identity_key: String,
    /// Reference credential pair logins are checked against
    pub credentials: Credentials,
    /// Session cookie attributes
    pub cookie: CookieConfig,
    /// Secret key for HMAC signing of the session cookie (32 bytes)
    pub session_secret: [u8; 32],
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identity_key: "user".to_string(),
            credentials: Credentials::demo(),
            cookie: CookieConfig::default(),
            session_secret: [0u8; 32],
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, random secret)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }
}

//! Auth (Authentication) Backend Module
//!
//! Cookie-session authentication demo:
//! - `application/` - Configuration and credential verification
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Form-based login against an injected reference credential pair
//! - Session state carried entirely in a signed cookie (no server store)
//! - Auth gate middleware protecting the `/private` subtree
//! - Logout that clears the session
//!
//! ## Security Model
//! - Session cookies signed with HMAC-SHA256; tampered cookies are
//!   treated as absent
//! - Credential comparison is constant-time
//! - This is a demo: credentials are plain configuration values, there
//!   is no user store and no session expiry

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use presentation::router::auth_router;

pub mod config {
    pub use crate::application::config::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

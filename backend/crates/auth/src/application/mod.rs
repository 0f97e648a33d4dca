//! Application Layer
//!
//! Configuration and credential verification.

pub mod config;
pub mod credentials;

// Re-exports
pub use config::AuthConfig;
pub use credentials::Credentials;

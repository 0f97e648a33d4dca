//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random secrets)
//! - Cookie management
//! - The cookie-backed session store (all session state travels in a
//!   signed cookie; nothing is kept in server memory)

pub mod cookie;
pub mod crypto;
pub mod session;

pub use session::{CookieSessionStore, Session, SessionError};

//! Cookie-Backed Session Store
//!
//! All session state is carried by the client in a single signed cookie.
//! The wire format is `base64url(json) "." base64url(hmac-sha256)`; the
//! server holds only the signing secret. A cookie that is absent, fails
//! to decode, or fails signature verification resolves to an empty
//! session, so tampering is indistinguishable from "no session".

use std::collections::BTreeMap;

use axum::http::HeaderMap;
use serde_json::Value;
use thiserror::Error;

use crate::cookie::{self, CookieConfig};
use crate::crypto;

/// Cookie values above this size risk being dropped by browsers
/// (4096 bytes per RFC 6265 minus name, `=` and separator overhead).
const MAX_COOKIE_BYTES: usize = 4093;

/// Session persistence error
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session data could not be serialized
    #[error("Failed to serialize session data")]
    Encode(#[from] serde_json::Error),

    /// Encoded session exceeds what a cookie can carry
    #[error("Encoded session is {len} bytes, exceeding the {max} byte cookie limit")]
    TooLarge { len: usize, max: usize },
}

/// One client's session: a string-keyed map reconstructed from the
/// request cookie and serialized back on save.
///
/// Absence of a key means the corresponding state does not exist; in
/// particular, absence of the identity key means "unauthenticated".
#[derive(Debug, Clone, Default)]
pub struct Session {
    values: BTreeMap<String, Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a string value by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Set a value, replacing any previous value under the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Delete a key, returning whether it was present
    pub fn delete(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn from_map(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }
}

/// Store that persists a [`Session`] into a signed cookie.
///
/// `load` binds the request cookie to an in-memory [`Session`]; `save`
/// produces the `Set-Cookie` value that must be attached to the response
/// for mutations to survive. Mutations that are never saved are lost.
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    config: CookieConfig,
    secret: [u8; 32],
}

impl CookieSessionStore {
    pub fn new(config: CookieConfig, secret: [u8; 32]) -> Self {
        Self { config, secret }
    }

    /// Name of the cookie this store reads and writes
    pub fn cookie_name(&self) -> &str {
        &self.config.name
    }

    /// Reconstruct the client's session from request headers.
    ///
    /// Never fails: a missing or invalid cookie yields a fresh empty
    /// session.
    pub fn load(&self, headers: &HeaderMap) -> Session {
        let Some(value) = cookie::extract_cookie(headers, &self.config.name) else {
            return Session::new();
        };

        match self.decode(&value) {
            Some(session) => session,
            None => {
                tracing::debug!(cookie = %self.config.name, "Discarding invalid session cookie");
                Session::new()
            }
        }
    }

    /// Serialize and sign the session into a `Set-Cookie` header value.
    ///
    /// Saving an empty session produces a removal cookie so the client
    /// stops sending stale state.
    pub fn save(&self, session: &Session) -> Result<String, SessionError> {
        if session.is_empty() {
            return Ok(self.config.build_delete_cookie());
        }

        let value = self.encode(session)?;
        Ok(self.config.build_set_cookie(&value))
    }

    fn encode(&self, session: &Session) -> Result<String, SessionError> {
        let json = serde_json::to_vec(&session.values)?;
        let payload = crypto::to_base64url(&json);
        let signature = crypto::hmac_sha256(&self.secret, payload.as_bytes());

        let value = format!("{}.{}", payload, crypto::to_base64url(&signature));
        if value.len() > MAX_COOKIE_BYTES {
            return Err(SessionError::TooLarge {
                len: value.len(),
                max: MAX_COOKIE_BYTES,
            });
        }

        Ok(value)
    }

    fn decode(&self, value: &str) -> Option<Session> {
        let (payload, signature) = value.split_once('.')?;

        let claimed = crypto::from_base64url(signature).ok()?;
        let expected = crypto::hmac_sha256(&self.secret, payload.as_bytes());
        if !crypto::constant_time_eq(&claimed, &expected) {
            return None;
        }

        let json = crypto::from_base64url(payload).ok()?;
        let values: BTreeMap<String, Value> = serde_json::from_slice(&json).ok()?;
        Some(Session::from_map(values))
    }
}

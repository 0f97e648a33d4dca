//! Reference Credentials
//!
//! In this demo the credential "store" is a single injected pair. A
//! real deployment would verify against a user store with hashed
//! passwords; here the pair is plain configuration.

use platform::crypto::constant_time_eq;

/// The reference username/password pair a login is checked against
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The fixed demo pair used when nothing is configured
    pub fn demo() -> Self {
        Self::new("hello", "itsme")
    }

    /// Check a submitted pair against the reference pair.
    ///
    /// Both fields are compared in constant time; no trimming or
    /// normalization is applied.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok && pass_ok
    }
}

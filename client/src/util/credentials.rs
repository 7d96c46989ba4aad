//! Admin credential check against build-time reference values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reference pair is compiled into the client bundle from
//! `PUBLIC_ADMIN_USERNAME` / `PUBLIC_ADMIN_PASSWORD`. Anyone holding the
//! delivered WASM can read both values, so this check is a convenience
//! gate, not a trust boundary.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;

/// Credentials submitted through the admin login form. Never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configured reference pair. A missing field never matches anything.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ReferenceCredentials {
    username: Option<String>,
    password: Option<String>,
}

impl ReferenceCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: Some(username.into()), password: Some(password.into()) }
    }

    /// Reference pair baked in at compile time.
    pub fn from_build_env() -> Self {
        Self {
            username: option_env!("PUBLIC_ADMIN_USERNAME").map(str::to_owned),
            password: option_env!("PUBLIC_ADMIN_PASSWORD").map(str::to_owned),
        }
    }

    /// Whether both reference fields were supplied.
    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl fmt::Debug for ReferenceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Exact, case-sensitive match of both fields. No trimming or normalization.
pub fn check(submitted: &Credentials, reference: &ReferenceCredentials) -> bool {
    let username_ok = reference
        .username
        .as_deref()
        .is_some_and(|expected| expected == submitted.username);
    let password_ok = reference
        .password
        .as_deref()
        .is_some_and(|expected| expected == submitted.password);
    username_ok && password_ok
}

//! Persisted admin-session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the admin login flow, cleared by logout, read by every
//! `ProtectedRoute` mount. The flag lives in the browser's local storage
//! under [`SESSION_KEY`] and carries no token, issuance time, or expiry.
//!
//! TRADE-OFFS
//! ==========
//! The flag is client-writable and unsigned; anyone who sets the key by hand
//! passes the gate. It stands in for a server-issued session and must be
//! replaced before the admin area guards anything real.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Storage key denoting "admin authenticated".
pub const SESSION_KEY: &str = "adminAuth";

/// The only stored value that counts as authenticated.
pub const AUTHENTICATED_SENTINEL: &str = "true";

/// Handle to the admin session flag. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Build a store over an injected storage backend.
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Mark the admin session active.
    pub fn set(&self) {
        self.storage.set_item(SESSION_KEY, AUTHENTICATED_SENTINEL);
    }

    /// `true` iff the stored marker is exactly the authenticated sentinel.
    pub fn get(&self) -> bool {
        self.storage
            .get_item(SESSION_KEY)
            .is_some_and(|value| value == AUTHENTICATED_SENTINEL)
    }

    /// Remove the marker. Clearing an already-cleared store is a no-op.
    pub fn clear(&self) {
        self.storage.remove_item(SESSION_KEY);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("authenticated", &self.get()).finish()
    }
}

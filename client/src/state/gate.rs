//! Mount-time authorization state for the admin area.
//!
//! DESIGN
//! ======
//! `Checking -> Authorized | Unauthorized`. A gate resolves exactly once,
//! when its owning view mounts. Clearing the session afterwards does not
//! move an `Authorized` gate; the next mount sees the change.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::session::SessionStore;

/// Route unauthenticated admin visitors are sent to.
pub const ADMIN_LOGIN_ROUTE: &str = "/admin/login";

/// Gate resolution state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Mounted, session not yet consulted.
    #[default]
    Checking,
    /// Session flag present; render the protected content.
    Authorized,
    /// No valid flag; render nothing and navigate away.
    Unauthorized,
}

impl GateState {
    /// Navigation side effect owed by this state, if any.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Unauthorized => Some(ADMIN_LOGIN_ROUTE),
            Self::Checking | Self::Authorized => None,
        }
    }

    pub fn renders_content(self) -> bool {
        self == Self::Authorized
    }
}

/// One gate per mounted protected view.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionGate {
    state: GateState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Consult the store if still `Checking`; otherwise keep the resolved state.
    pub fn mount(&mut self, store: &SessionStore) -> GateState {
        if self.state == GateState::Checking {
            self.state = if store.get() { GateState::Authorized } else { GateState::Unauthorized };
        }
        self.state
    }
}

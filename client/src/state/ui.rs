//! Local UI chrome state (theme, menus, sidebars, contact modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state (`portal`,
//! `admin`) so navigation chrome can evolve independently of page data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Delay standing in for the contact form's send round trip.
pub const CONTACT_SEND_MS: u64 = 1500;

/// How long the contact modal shows its success panel before closing.
pub const CONTACT_SUCCESS_MS: u64 = 2000;

/// UI state shared through context by the navbar, theme toggle, and
/// dashboard chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub contact_open: bool,
    pub dashboard_sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, mobile_menu_open: false, contact_open: false, dashboard_sidebar_open: true }
    }
}

impl UiState {
    /// Opening the contact modal from the mobile menu also collapses it.
    pub fn open_contact(&mut self) {
        self.contact_open = true;
        self.mobile_menu_open = false;
    }
}

/// Contact modal form. Sending is simulated; nothing leaves the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    pub sent: bool,
}

impl ContactForm {
    /// All three fields carry non-blank text.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message].iter().all(|v| !v.trim().is_empty())
    }

    /// Start a send. Returns false when incomplete or already sending.
    pub fn begin_send(&mut self) -> bool {
        if self.submitting || !self.is_complete() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Finish a send: clear fields and show the success panel.
    pub fn finish_send(&mut self) {
        *self = Self { sent: true, ..Self::default() };
    }
}

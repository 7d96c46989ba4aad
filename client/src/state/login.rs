//! Admin login form state and submit transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminLoginPage` owns one `LoginForm` signal. Submitting compares the
//! form against the reference pair; on a match the session flag is written
//! and the page navigates to the dashboard after [`REDIRECT_DELAY_MS`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::state::session::SessionStore;
use crate::util::credentials::{self, Credentials, ReferenceCredentials};

/// Gated area entered after a successful login.
pub const ADMIN_DASHBOARD_ROUTE: &str = "/admin/dashboard";

/// Cosmetic pause between the session write and the navigation.
pub const REDIRECT_DELAY_MS: u64 = 500;

/// Generic rejection text; never says which field was wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Result of one submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session written; navigate to `redirect`.
    Authenticated { redirect: &'static str },
    /// Mismatch; error shown and store untouched.
    Rejected,
    /// A previous submit is still in flight; ignored.
    Busy,
}

/// Controlled inputs plus submit bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub show_password: bool,
    pub error: Option<&'static str>,
    pub loading: bool,
}

impl LoginForm {
    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Logging in..." } else { "Login to Admin Panel" }
    }

    /// Input `type` attribute for the password field.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Run the credential check and apply its effects to `store`.
    pub fn submit(&mut self, reference: &ReferenceCredentials, store: &SessionStore) -> LoginOutcome {
        if self.loading {
            return LoginOutcome::Busy;
        }
        self.error = None;
        self.loading = true;

        let submitted = Credentials::new(self.username.clone(), self.password.clone());
        if credentials::check(&submitted, reference) {
            store.set();
            LoginOutcome::Authenticated { redirect: ADMIN_DASHBOARD_ROUTE }
        } else {
            self.error = Some(INVALID_CREDENTIALS_MESSAGE);
            self.loading = false;
            LoginOutcome::Rejected
        }
    }
}

/// End the admin session. Returns the route to navigate to.
pub fn logout(store: &SessionStore) -> &'static str {
    store.clear();
    crate::state::gate::ADMIN_LOGIN_ROUTE
}

use super::*;
use crate::state::gate::{GateState, SessionGate};
use crate::util::storage::MemoryStorage;

fn reference() -> ReferenceCredentials {
    ReferenceCredentials::new("admin", "secret123")
}

fn form(username: &str, password: &str) -> LoginForm {
    LoginForm { username: username.to_owned(), password: password.to_owned(), ..LoginForm::default() }
}

fn store() -> SessionStore {
    SessionStore::new(MemoryStorage::new())
}

// =============================================================
// submit
// =============================================================

#[test]
fn matching_credentials_write_store_and_redirect() {
    let store = store();
    let mut form = form("admin", "secret123");
    let outcome = form.submit(&reference(), &store);
    assert_eq!(outcome, LoginOutcome::Authenticated { redirect: "/admin/dashboard" });
    assert!(store.get());
    assert_eq!(form.error, None);
    assert!(form.loading);
}

#[test]
fn wrong_password_shows_error_and_leaves_store_unchanged() {
    let store = store();
    let mut form = form("admin", "wrongpass");
    let outcome = form.submit(&reference(), &store);
    assert_eq!(outcome, LoginOutcome::Rejected);
    assert_eq!(form.error, Some("Invalid username or password"));
    assert!(!form.loading);
    assert!(!store.get());
}

#[test]
fn rejected_submit_allows_immediate_resubmission() {
    let store = store();
    let mut form = form("admin", "wrongpass");
    assert_eq!(form.submit(&reference(), &store), LoginOutcome::Rejected);

    form.password = "secret123".to_owned();
    assert!(matches!(form.submit(&reference(), &store), LoginOutcome::Authenticated { .. }));
    assert_eq!(form.error, None);
}

#[test]
fn submit_while_loading_is_ignored() {
    let store = store();
    let mut form = form("admin", "secret123");
    assert!(matches!(form.submit(&reference(), &store), LoginOutcome::Authenticated { .. }));
    store.clear();

    assert_eq!(form.submit(&reference(), &store), LoginOutcome::Busy);
    assert!(!store.get());
}

#[test]
fn unconfigured_reference_always_rejects() {
    let store = store();
    let mut form = form("", "");
    assert_eq!(form.submit(&ReferenceCredentials::default(), &store), LoginOutcome::Rejected);
    assert!(!store.get());
}

#[test]
fn case_mismatch_is_rejected() {
    let store = store();
    let mut form = form("Admin", "secret123");
    assert_eq!(form.submit(&reference(), &store), LoginOutcome::Rejected);
}

#[test]
fn editing_fields_keeps_error_until_next_submit() {
    let store = store();
    let mut form = form("admin", "nope");
    form.submit(&reference(), &store);
    form.password.push('x');
    assert_eq!(form.error, Some(INVALID_CREDENTIALS_MESSAGE));
}

// =============================================================
// presentation helpers
// =============================================================

#[test]
fn submit_label_tracks_loading() {
    let mut form = LoginForm::default();
    assert_eq!(form.submit_label(), "Login to Admin Panel");
    form.loading = true;
    assert_eq!(form.submit_label(), "Logging in...");
}

#[test]
fn password_visibility_toggles_input_type() {
    let mut form = LoginForm::default();
    assert_eq!(form.password_input_type(), "password");
    form.show_password = true;
    assert_eq!(form.password_input_type(), "text");
}

// =============================================================
// logout and the full lifecycle
// =============================================================

#[test]
fn logout_clears_store_and_returns_login_route() {
    let store = store();
    store.set();
    assert_eq!(logout(&store), "/admin/login");
    assert!(!store.get());
}

#[test]
fn logout_twice_is_idempotent() {
    let store = store();
    store.set();
    logout(&store);
    let once = store.get();
    logout(&store);
    assert_eq!(store.get(), once);
    assert!(!store.get());
}

#[test]
fn login_then_gate_then_logout_then_gate() {
    let store = store();
    assert_eq!(SessionGate::new().mount(&store), GateState::Unauthorized);

    let mut form = form("admin", "secret123");
    form.submit(&reference(), &store);
    assert_eq!(SessionGate::new().mount(&store), GateState::Authorized);

    logout(&store);
    assert_eq!(SessionGate::new().mount(&store), GateState::Unauthorized);
}

use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> SessionStore {
    SessionStore::new(MemoryStorage::new())
}

// =============================================================
// GateState
// =============================================================

#[test]
fn new_gate_is_checking() {
    let gate = SessionGate::new();
    assert_eq!(gate.state(), GateState::Checking);
    assert!(!gate.state().renders_content());
    assert_eq!(gate.state().redirect_target(), None);
}

#[test]
fn only_unauthorized_redirects() {
    assert_eq!(GateState::Unauthorized.redirect_target(), Some("/admin/login"));
    assert_eq!(GateState::Authorized.redirect_target(), None);
    assert_eq!(GateState::Checking.redirect_target(), None);
}

#[test]
fn only_authorized_renders_content() {
    assert!(GateState::Authorized.renders_content());
    assert!(!GateState::Unauthorized.renders_content());
    assert!(!GateState::Checking.renders_content());
}

// =============================================================
// mount
// =============================================================

#[test]
fn mount_without_flag_redirects_and_hides_content() {
    let store = store();
    let mut gate = SessionGate::new();
    let state = gate.mount(&store);
    assert_eq!(state, GateState::Unauthorized);
    assert_eq!(state.redirect_target(), Some(ADMIN_LOGIN_ROUTE));
    assert!(!state.renders_content());
}

#[test]
fn mount_with_flag_renders_without_navigating() {
    let store = store();
    store.set();
    let mut gate = SessionGate::new();
    let state = gate.mount(&store);
    assert_eq!(state, GateState::Authorized);
    assert_eq!(state.redirect_target(), None);
    assert!(state.renders_content());
}

#[test]
fn clearing_flag_after_mount_keeps_content_visible() {
    let store = store();
    store.set();
    let mut gate = SessionGate::new();
    assert_eq!(gate.mount(&store), GateState::Authorized);

    store.clear();
    assert_eq!(gate.mount(&store), GateState::Authorized);
    assert!(gate.state().renders_content());

    let mut remounted = SessionGate::new();
    assert_eq!(remounted.mount(&store), GateState::Unauthorized);
}

#[test]
fn setting_flag_after_unauthorized_mount_needs_remount() {
    let store = store();
    let mut gate = SessionGate::new();
    assert_eq!(gate.mount(&store), GateState::Unauthorized);

    store.set();
    assert_eq!(gate.mount(&store), GateState::Unauthorized);
    assert_eq!(SessionGate::new().mount(&store), GateState::Authorized);
}

use super::*;
use crate::util::storage::MemoryStorage;

fn fresh() -> (SessionStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::new(storage.clone()), storage)
}

// =============================================================
// get / set / clear
// =============================================================

#[test]
fn fresh_storage_is_not_authenticated() {
    let (store, _) = fresh();
    assert!(!store.get());
}

#[test]
fn set_writes_sentinel_under_session_key() {
    let (store, storage) = fresh();
    store.set();
    assert!(store.get());
    assert_eq!(storage.get_item("adminAuth"), Some("true".to_owned()));
}

#[test]
fn clear_removes_marker() {
    let (store, storage) = fresh();
    store.set();
    store.clear();
    assert!(!store.get());
    assert_eq!(storage.get_item(SESSION_KEY), None);
}

#[test]
fn clear_twice_matches_clear_once() {
    let (store, storage) = fresh();
    store.set();
    store.clear();
    let after_one = (store.get(), storage.get_item(SESSION_KEY));
    store.clear();
    let after_two = (store.get(), storage.get_item(SESSION_KEY));
    assert_eq!(after_one, after_two);
    assert!(!after_two.0);
}

#[test]
fn clear_on_fresh_storage_is_noop() {
    let (store, storage) = fresh();
    store.clear();
    assert!(!store.get());
    assert!(storage.is_empty());
}

// =============================================================
// Non-sentinel values read as absent
// =============================================================

#[test]
fn other_stored_values_are_not_authenticated() {
    for raw in ["false", "TRUE", "True", "1", "yes", "", " true", "true "] {
        let (store, storage) = fresh();
        storage.set_item(SESSION_KEY, raw);
        assert!(!store.get(), "expected {raw:?} to read as absent");
    }
}

#[test]
fn sentinel_under_other_key_is_ignored() {
    let (store, storage) = fresh();
    storage.set_item("adminauth", "true");
    assert!(!store.get());
}

#[test]
fn clones_share_the_same_flag() {
    let (store, _) = fresh();
    let other = store.clone();
    store.set();
    assert!(other.get());
    other.clear();
    assert!(!store.get());
}

#[test]
fn debug_reports_flag_state() {
    let (store, _) = fresh();
    store.set();
    assert_eq!(format!("{store:?}"), "SessionStore { authenticated: true }");
}

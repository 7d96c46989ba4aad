use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn no_stored_preference_reads_none() {
    assert_eq!(stored_preference(&MemoryStorage::new()), None);
}

#[test]
fn stored_preference_round_trips_both_values() {
    let storage = MemoryStorage::new();
    store_preference(&storage, true);
    assert_eq!(stored_preference(&storage), Some(true));
    store_preference(&storage, false);
    assert_eq!(stored_preference(&storage), Some(false));
}

#[test]
fn garbage_preference_reads_none() {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, "dark");
    assert_eq!(stored_preference(&storage), None);
}

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStorage::new();
    assert!(toggle_in(&storage, false));
    assert_eq!(stored_preference(&storage), Some(true));
    assert!(!toggle_in(&storage, true));
    assert_eq!(stored_preference(&storage), Some(false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn apply_is_callable_outside_browser() {
    apply(false);
    apply(true);
}

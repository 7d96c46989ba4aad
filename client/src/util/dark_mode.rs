//! Theme preference initialization and toggle.
//!
//! Reads the stored preference, falling back to the system colour scheme,
//! and applies a `dark` class to the `<html>` element. Toggling writes the
//! new preference back through the same storage seam as the session flag.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage::{BrowserStorage, KeyValueStore};

const STORAGE_KEY: &str = "agency_theme_dark";

/// Stored preference, if one was ever written.
pub fn stored_preference(storage: &dyn KeyValueStore) -> Option<bool> {
    match storage.get_item(STORAGE_KEY)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Persist `enabled` as the theme preference.
pub fn store_preference(storage: &dyn KeyValueStore, enabled: bool) {
    storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
}

/// Read the dark mode preference from localStorage.
///
/// Returns the stored choice, or whether the system prefers dark mode when
/// nothing is stored.
pub fn read_preference() -> bool {
    stored_preference(&BrowserStorage).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if enabled { class_list.add_1("dark") } else { class_list.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    toggle_in(&BrowserStorage, current)
}

pub(crate) fn toggle_in(storage: &dyn KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    store_preference(storage, next);
    next
}

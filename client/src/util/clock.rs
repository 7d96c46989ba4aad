//! Calendar helpers for form defaults.

/// Today's date as `YYYY-MM-DD` (UTC). Empty outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.split('T').next().unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

//! Native confirmation prompt for destructive admin actions.

/// Ask the user to confirm `message`. Outside the browser there is nobody
/// to ask and the action proceeds.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        true
    }
}

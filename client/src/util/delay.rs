//! Deferred UI actions (simulated round trips, cosmetic redirects).
//!
//! TRADE-OFFS
//! ==========
//! Timers exist only in the browser. On the server the action is dropped;
//! event handlers never fire during SSR, so nothing is lost.

/// Run `then` after `ms` milliseconds.
pub fn after_ms(ms: u64, then: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
        then();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, then);
    }
}

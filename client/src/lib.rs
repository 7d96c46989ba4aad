#![recursion_limit = "256"]
//! # agency-web
//!
//! Leptos + WASM frontend for the agency site: marketing pages, the client
//! portal, and the admin back-office behind a local session gate.
//!
//! The crate renders on the server through `leptos_axum` (`ssr` feature) and
//! hydrates in the browser (`hydrate` feature). Pure state lives in `state`
//! and `util`; `pages` and `components` bind it to the DOM.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and console logging hooks, then hydrate
/// the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches a few plain HTTP endpoints together with Leptos SSR
//! rendering under a single Axum router. Every application page, including
//! the admin area, is rendered by the Leptos app; the admin session gate runs
//! in the browser, so nothing here inspects sessions.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Health probe and convenience redirects; no Leptos options needed.
pub fn api_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/admin", get(redirect_admin_to_dashboard))
        .route("/dashboard/login", get(redirect_dashboard_login_to_admin))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_admin_to_dashboard() -> Redirect {
    Redirect::temporary("/admin/dashboard")
}

/// Older links pointed the admin login at `/dashboard/login`.
async fn redirect_dashboard_login_to_admin() -> Redirect {
    Redirect::temporary("/admin/login")
}

/// Full host: plain routes + Leptos SSR + `/pkg` assets, compressed and traced.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(agency_web::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || agency_web::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue, and CSS from cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

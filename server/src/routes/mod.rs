//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe and Leptos SSR rendering under a single Axum
//! router. Compiled WASM/JS/CSS is served from `/pkg`. Any other path no
//! page route claims is looked up in the site root (images, favicon) and,
//! when no file matches, rendered by the app's not-found fallback.

pub mod health;

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use landing_client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend: page routes, compiled assets and the health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(health::healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

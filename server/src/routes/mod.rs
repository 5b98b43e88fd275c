//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR page at `/`, the WASM/JS/CSS bundle
//! under `/pkg`, a health probe, and falls back to the assets directory for
//! gallery images.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not depend on Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health probe + Leptos SSR + static files.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (normally provided by `cargo-leptos` through `LEPTOS_*` variables).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_path = config.assets_dir.clone().unwrap_or_else(|| site_root_path.clone());
    tracing::debug!(site_root = %site_root_path.display(), assets = %assets_path.display(), "static directories");

    let router = base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(assets_path))
        .layer(TraceLayer::new_for_http());

    Ok(if config.compression { router.layer(CompressionLayer::new()) } else { router })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

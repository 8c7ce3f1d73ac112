//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{code}`  - Short link resolution and redirect (public)
//! - `GET /health`  - Health check: store connectivity (public)
//!
//! Anything else, including the bare `/`, falls through to the router's
//! not-found response.
//!
//! # Middleware
//!
//! - **Tracing** - per-request correlation id span plus entry/exit logging
//! - **Server header** - serving software identity on every response
//! - **Path normalization** - trailing slash handling
use crate::api::handlers::{health_handler, resolve_handler};
use crate::api::middleware::{server_header, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(resolve_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(middleware::from_fn(server_header::server_header_mw))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

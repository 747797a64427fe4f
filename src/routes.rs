//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Always 404 (no short code)
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /health`       - Storage health check
//! - `POST /api/shorten`  - Shorten a long URL
//!
//! Any other method on these paths gets 405 Method Not Allowed.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Integration tests drive this directly; [`app_router`] wraps it for serving.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service, trimming trailing slashes before
/// routing so `/ABC1/` resolves like `/ABC1`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/items*`        - Item CRUD (see [`crate::api::routes::item_routes`])
//! - `/health/live`   - Liveness check
//! - `/health/ready`  - Readiness check, pings the repository
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::tracing;
use crate::api::routes::{health_routes, item_routes};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(item_routes())
        .merge(health_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

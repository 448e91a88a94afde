//! API route configuration.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, get_items_handler,
    liveness_handler, readiness_handler, update_item_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Item CRUD routes.
///
/// # Endpoints
///
/// - `GET    /items`       - List all items
/// - `POST   /items`       - Create an item
/// - `GET    /items/{id}`  - Fetch one item
/// - `PUT    /items/{id}`  - Replace an item's name and price
/// - `DELETE /items/{id}`  - Delete an item
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(get_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
}

/// Liveness and readiness checks.
///
/// - `GET /health/live`  - Process is up
/// - `GET /health/ready` - Repository reachable
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
}

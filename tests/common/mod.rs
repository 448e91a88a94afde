#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use catalog::api::routes::{health_routes, item_routes};
use catalog::domain::entities::Item;
use catalog::domain::repositories::ItemsRepository;
use catalog::error::AppError;
use catalog::infrastructure::persistence::InMemoryItemsRepository;
use catalog::state::AppState;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Builds an item with a random id and name, created now.
pub fn create_random_item(price: i64) -> Item {
    Item::new(
        Uuid::new_v4(),
        Uuid::new_v4().to_string(),
        Decimal::from(price),
        Utc::now(),
    )
}

/// Builds state over an in-memory repository seeded with `items`.
///
/// The repository handle is returned so tests can inspect stored data
/// without going through HTTP.
pub fn create_test_state(items: Vec<Item>) -> (AppState, Arc<InMemoryItemsRepository>) {
    let repository = Arc::new(InMemoryItemsRepository::with_items(items));
    let state = AppState::new(repository.clone());
    (state, repository)
}

/// Test server with item and health routes over the given state.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(item_routes())
        .merge(health_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Repository whose every call fails, for exercising error paths.
pub struct FailingRepository;

fn failure() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl ItemsRepository for FailingRepository {
    async fn get_item(&self, _id: Uuid) -> Result<Option<Item>, AppError> {
        Err(failure())
    }

    async fn get_items(&self) -> Result<Vec<Item>, AppError> {
        Err(failure())
    }

    async fn create_item(&self, _item: Item) -> Result<(), AppError> {
        Err(failure())
    }

    async fn update_item(&self, _item: Item) -> Result<(), AppError> {
        Err(failure())
    }

    async fn delete_item(&self, _id: Uuid) -> Result<(), AppError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(failure())
    }
}

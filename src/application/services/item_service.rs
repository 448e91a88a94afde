//! Item catalog service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::api::dto::items::{CreateItemDto, UpdateItemDto};
use crate::domain::entities::Item;
use crate::domain::repositories::ItemsRepository;
use crate::error::AppError;

/// Service orchestrating item CRUD over an [`ItemsRepository`].
///
/// Holds no state of its own. Identifiers and creation timestamps are
/// assigned here, never taken from the client.
pub struct ItemService<R: ItemsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ItemsRepository + ?Sized> ItemService<R> {
    /// Creates a new item service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a single item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_item(&self, id: Uuid) -> Result<Item, AppError> {
        self.repository
            .get_item(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists every item in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_items(&self) -> Result<Vec<Item>, AppError> {
        let items = self.repository.get_items().await?;
        tracing::info!(count = items.len(), "Retrieved items");
        Ok(items)
    }

    /// Creates an item from a validated request.
    ///
    /// No existence check is made; every call stores a new item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_item(&self, dto: CreateItemDto) -> Result<Item, AppError> {
        let item = Item::create(dto.name, dto.price);

        self.repository.create_item(item.clone()).await?;
        tracing::info!(id = %item.id, name = %item.name, "Item created");

        Ok(item)
    }

    /// Replaces the name and price of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this identifier; nothing is written.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_item(&self, id: Uuid, dto: UpdateItemDto) -> Result<(), AppError> {
        let existing = self.get_item(id).await?;
        let updated = existing.with_details(dto.name, dto.price);

        self.repository.update_item(updated).await?;
        tracing::info!(%id, "Item updated");

        Ok(())
    }

    /// Removes an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this identifier; nothing is removed.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_item(&self, id: Uuid) -> Result<(), AppError> {
        self.get_item(id).await?;

        self.repository.delete_item(id).await?;
        tracing::info!(%id, "Item deleted");

        Ok(())
    }

    /// Reports whether the underlying repository is reachable.
    ///
    /// # Errors
    ///
    /// Propagates the repository's ping failure.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found("Item not found", json!({ "id": id }))
}

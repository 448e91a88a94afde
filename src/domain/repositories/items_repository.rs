//! Repository trait for item data access.

use crate::domain::entities::Item;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for catalog items keyed by identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryItemsRepository`] - process-local store
/// - [`crate::infrastructure::persistence::PgItemsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Finds an item by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Item))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, AppError>;

    /// Lists every stored item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_items(&self) -> Result<Vec<Item>, AppError>;

    /// Persists a fully formed item. Identifier and creation date are set by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create_item(&self, item: Item) -> Result<(), AppError>;

    /// Replaces the stored item that has the same identifier.
    ///
    /// Callers check existence beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_item(&self, item: Item) -> Result<(), AppError>;

    /// Removes the item with the given identifier.
    ///
    /// Callers check existence beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_item(&self, id: Uuid) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}

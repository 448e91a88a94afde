//! Process-local item repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Item;
use crate::domain::repositories::ItemsRepository;
use crate::error::AppError;

/// Item repository that keeps everything in memory.
///
/// Items are returned in insertion order. Contents are lost when the process exits.
/// Used for local development, for `STORAGE=memory` and by handler tests.
#[derive(Default)]
pub struct InMemoryItemsRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemsRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemsRepository for InMemoryItemsRepository {
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, AppError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn get_items(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.items.read().await.clone())
    }

    async fn create_item(&self, item: Item) -> Result<(), AppError> {
        self.items.write().await.push(item);
        Ok(())
    }

    async fn update_item(&self, item: Item) -> Result<(), AppError> {
        let mut items = self.items.write().await;
        if let Some(slot) = items.iter_mut().find(|existing| existing.id == item.id) {
            *slot = item;
        }
        Ok(())
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), AppError> {
        self.items.write().await.retain(|item| item.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ItemService;
use crate::domain::repositories::ItemsRepository;

/// State cloned into every request handler.
///
/// The repository behind the service is chosen at startup
/// (in-memory or PostgreSQL), so it is held as a trait object.
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService<dyn ItemsRepository>>,
}

impl AppState {
    /// Builds state around the given repository.
    pub fn new(repository: Arc<dyn ItemsRepository>) -> Self {
        Self {
            item_service: Arc::new(ItemService::new(repository)),
        }
    }
}

//! PostgreSQL implementation of the item repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Item;
use crate::domain::repositories::ItemsRepository;
use crate::error::AppError;

/// PostgreSQL repository for item storage and retrieval.
///
/// Uses bound parameters for every value. Table layout lives in `migrations/`.
pub struct PgItemsRepository {
    pool: Arc<PgPool>,
}

impl PgItemsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    price: Decimal,
    created_date: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(row.id, row.name, row.price, row.created_date)
    }
}

#[async_trait]
impl ItemsRepository for PgItemsRepository {
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, AppError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, created_date FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Item::from))
    }

    async fn get_items(&self) -> Result<Vec<Item>, AppError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, created_date FROM items ORDER BY created_date, id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create_item(&self, item: Item) -> Result<(), AppError> {
        sqlx::query("INSERT INTO items (id, name, price, created_date) VALUES ($1, $2, $3, $4)")
            .bind(item.id)
            .bind(&item.name)
            .bind(item.price)
            .bind(item.created_date)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn update_item(&self, item: Item) -> Result<(), AppError> {
        sqlx::query("UPDATE items SET name = $2, price = $3 WHERE id = $1")
            .bind(item.id)
            .bind(&item.name)
            .bind(item.price)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

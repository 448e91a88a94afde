//! PostgreSQL repository tests.
//!
//! Run with `DATABASE_URL` pointing at a scratch server:
//!
//! ```bash
//! cargo test --features postgres-tests --test repository_item
//! ```

#![cfg(feature = "postgres-tests")]

use catalog::domain::entities::Item;
use catalog::domain::repositories::ItemsRepository;
use catalog::infrastructure::persistence::PgItemsRepository;
use chrono::{Duration, DurationRound, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Postgres stores microseconds; truncate so round-tripped values compare equal.
fn item(name: &str, price: Decimal, age_minutes: i64) -> Item {
    let created = (Utc::now() - Duration::minutes(age_minutes))
        .duration_trunc(Duration::microseconds(1))
        .unwrap();
    Item::new(Uuid::new_v4(), name.to_string(), price, created)
}

fn repo(pool: PgPool) -> PgItemsRepository {
    PgItemsRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_create_and_get(pool: PgPool) {
    let repo = repo(pool);
    let potion = item("Potion", Decimal::new(950, 2), 0);

    repo.create_item(potion.clone()).await.unwrap();

    let found = repo.get_item(potion.id).await.unwrap();
    assert_eq!(found, Some(potion));
}

#[sqlx::test]
async fn test_freshly_created_item_reads_back_unchanged(pool: PgPool) {
    let repo = repo(pool);
    let created = Item::create("Elixir".to_string(), Decimal::new(1999, 2));

    repo.create_item(created.clone()).await.unwrap();

    let found = repo.get_item(created.id).await.unwrap().unwrap();
    assert_eq!(found.created_date, created.created_date);
    assert_eq!(found.price.to_string(), created.price.to_string());
}

#[sqlx::test]
async fn test_get_unknown(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.get_item(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_get_items_ordered_by_creation(pool: PgPool) {
    let repo = repo(pool);
    let older = item("older", Decimal::from(1), 10);
    let newer = item("newer", Decimal::from(2), 1);

    repo.create_item(newer.clone()).await.unwrap();
    repo.create_item(older.clone()).await.unwrap();

    let items = repo.get_items().await.unwrap();
    assert_eq!(items, vec![older, newer]);
}

#[sqlx::test]
async fn test_update_keeps_created_date(pool: PgPool) {
    let repo = repo(pool);
    let foo = item("foo", Decimal::from(10), 60);
    repo.create_item(foo.clone()).await.unwrap();

    repo.update_item(foo.with_details("bar".to_string(), Decimal::from(13)))
        .await
        .unwrap();

    let stored = repo.get_item(foo.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "bar");
    assert_eq!(stored.price, Decimal::from(13));
    assert_eq!(stored.created_date, foo.created_date);
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let repo = repo(pool);
    let keep = item("keep", Decimal::from(1), 2);
    let removed = item("removed", Decimal::from(2), 1);
    repo.create_item(keep.clone()).await.unwrap();
    repo.create_item(removed.clone()).await.unwrap();

    repo.delete_item(removed.id).await.unwrap();

    assert_eq!(repo.get_items().await.unwrap(), vec![keep]);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    assert!(repo(pool).ping().await.is_ok());
}

//! Repository implementations.
//!
//! - [`InMemoryItemsRepository`] - Process-local store, insertion ordered
//! - [`PgItemsRepository`] - PostgreSQL storage via SQLx

pub mod memory_item_repository;
pub mod pg_item_repository;

pub use memory_item_repository::InMemoryItemsRepository;
pub use pg_item_repository::PgItemsRepository;

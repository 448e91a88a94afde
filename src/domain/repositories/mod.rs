//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_item.rs` for the PostgreSQL
//! implementation.

pub mod items_repository;

pub use items_repository::ItemsRepository;

#[cfg(test)]
pub use items_repository::MockItemsRepository;

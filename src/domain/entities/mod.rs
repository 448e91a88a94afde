//! Core domain entities.
//!
//! Entities are plain data structures. Request and response shapes live in
//! [`crate::api::dto`] and are mapped from these types at the HTTP boundary.

pub mod item;

pub use item::Item;

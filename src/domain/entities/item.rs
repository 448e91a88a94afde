//! Item entity representing a catalog record.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A catalog item as stored by an [`ItemsRepository`](crate::domain::repositories::ItemsRepository).
///
/// `id` and `created_date` are assigned once when the item is created and never change.
/// Only `name` and `price` are replaced on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Creates an Item from already-known field values.
    pub fn new(id: Uuid, name: String, price: Decimal, created_date: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            price,
            created_date,
        }
    }

    /// Builds a brand new item with a fresh random identifier stamped with the current time.
    ///
    /// The timestamp is truncated to microseconds, the precision PostgreSQL
    /// `TIMESTAMPTZ` keeps, so a stored item reads back unchanged.
    pub fn create(name: String, price: Decimal) -> Self {
        Self::new(Uuid::new_v4(), name, price, Utc::now().trunc_subsecs(6))
    }

    /// Returns a copy with `name` and `price` replaced, keeping identity and creation time.
    pub fn with_details(&self, name: String, price: Decimal) -> Self {
        Self {
            id: self.id,
            name,
            price,
            created_date: self.created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_item_create_assigns_identity() {
        let before = Utc::now().trunc_subsecs(6);
        let item = Item::create("Potion".to_string(), Decimal::from(9));

        assert!(!item.id.is_nil());
        assert_eq!(item.name, "Potion");
        assert_eq!(item.price, Decimal::from(9));
        assert!(item.created_date >= before);
        assert!(item.created_date - before < Duration::seconds(5));
    }

    #[test]
    fn test_item_create_timestamp_has_microsecond_precision() {
        for _ in 0..100 {
            let item = Item::create("Potion".to_string(), Decimal::from(9));
            assert_eq!(item.created_date.timestamp_subsec_nanos() % 1000, 0);
        }
    }

    #[test]
    fn test_item_create_generates_distinct_ids() {
        let a = Item::create("a".to_string(), Decimal::ONE);
        let b = Item::create("b".to_string(), Decimal::ONE);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_details_preserves_identity() {
        let created = Utc::now() - Duration::days(3);
        let item = Item::new(Uuid::new_v4(), "foo".to_string(), Decimal::from(10), created);

        let updated = item.with_details("bar".to_string(), Decimal::from(13));

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.created_date, created);
        assert_eq!(updated.name, "bar");
        assert_eq!(updated.price, Decimal::from(13));
    }
}

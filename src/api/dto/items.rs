//! DTOs for the item endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::Item;

/// Lowest accepted price, inclusive.
pub const MIN_PRICE: Decimal = Decimal::ONE;

/// Highest accepted price, inclusive.
pub const MAX_PRICE: Decimal = Decimal::ONE_THOUSAND;

/// Decimal places kept by the `items.price` column.
pub const PRICE_SCALE: u32 = 2;

/// Request body for `POST /items`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// Request body for `PUT /items/{id}`.
///
/// Both fields replace the stored values; there is no partial update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItemDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// Outward read shape of an [`Item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        let mut err = ValidationError::new("range");
        err.message = Some(format!("Price must be between {MIN_PRICE} and {MAX_PRICE}").into());
        return Err(err);
    }
    if price.normalize().scale() > PRICE_SCALE {
        let mut err = ValidationError::new("scale");
        err.message = Some(format!("Price must have at most {PRICE_SCALE} decimal places").into());
        return Err(err);
    }
    Ok(())
}

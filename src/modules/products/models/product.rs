// Product entity and its transfer object.
//
// The entity mirrors the `products` table; its id is assigned by the
// database on first save and never changes afterwards. The DTO is the
// boundary representation: no invariants are enforced at construction,
// validation happens in the service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted product record
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    /// `None` until the store assigns an id on first save
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    /// Build a transient product, not yet persisted
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }
}

/// Product transfer object used at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
}

impl ProductDto {
    pub fn new(id: Option<i64>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

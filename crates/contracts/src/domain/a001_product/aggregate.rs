use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i32);

impl AggregateId for ProductId {
    fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog item. Price is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub price: i64,
    pub stock: i32,
}

impl Product {
    /// Whether `quantity` units can be taken from stock
    pub fn can_fulfil(&self, quantity: i32) -> bool {
        quantity > 0 && self.stock >= quantity
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn collection_name() -> &'static str {
        "products"
    }
}

use crate::model::{OutletId, ProductId};
use serde::{Deserialize, Serialize};

/// Identifies one stock row: one product, one size, at one outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockKey {
    pub sales_outlet_id: OutletId,
    pub product_id: ProductId,
    pub size: i64,
}

impl StockKey {
    pub fn new(sales_outlet_id: OutletId, product_id: ProductId, size: i64) -> Self {
        Self {
            sales_outlet_id,
            product_id,
            size,
        }
    }
}

/// A stock row. Zero is a valid resting amount, distinct from a missing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StockItem {
    pub sales_outlet_id: OutletId,
    pub product_id: ProductId,
    pub size: i64,
    pub amount: i64,
}

impl StockItem {
    pub fn key(&self) -> StockKey {
        StockKey::new(self.sales_outlet_id, self.product_id, self.size)
    }
}

/// A stock row joined with the product it counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StockListing {
    pub sales_outlet_id: OutletId,
    pub product_id: ProductId,
    pub product_name: String,
    pub description: String,
    pub price: i64,
    pub size: i64,
    pub amount: i64,
}

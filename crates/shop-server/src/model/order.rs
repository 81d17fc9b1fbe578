//! Customer orders and their line items.
//!
//! [`Order`] and [`OrderItem`] implement [`Resource`](shop_gateway::Resource) in
//! [`crate::orders`], where the restock hooks live.
use crate::model::{OutletId, ProductId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status every order starts in.
pub const INITIAL_ORDER_STATUS: &str = "ordered";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct OrderId(pub i64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Type-safe identifier for order line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct OrderItemId(pub i64);

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub sales_outlet_id: OutletId,
    pub created_at: NaiveDateTime,
    /// Free-form; any non-empty string other than the current one is accepted.
    pub status_name: String,
}

/// Header row written when an order is placed.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub sales_outlet_id: OutletId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

/// A line item. `price` is the unit price captured when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub amount: i64,
    pub price: i64,
    pub size: i64,
}

#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub amount: i64,
    pub price: i64,
    pub size: i64,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub size: i64,
    pub amount: i64,
    pub price: i64,
}

/// Body of an order placement. The owning user comes from the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub sales_outlet_id: OutletId,
    pub items: Vec<OrderLine>,
}

/// An order as listed for its owner, with the outlet address resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserOrder {
    pub id: OrderId,
    pub user_id: UserId,
    pub sales_outlet_id: OutletId,
    pub sales_outlet_address: String,
    pub created_at: NaiveDateTime,
    pub status_name: String,
}

/// A line item joined with its product's name and first image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItemDetails {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_image: Option<String>,
    pub amount: i64,
    pub price: i64,
    pub size: i64,
}

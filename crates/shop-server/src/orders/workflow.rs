//! Order placement.
//!
//! Placement runs in two phases. [`check_request`] and [`check_availability`] reject
//! a bad request before anything is written. [`persist_order`] then writes the header,
//! the line items and the stock decrements through the caller's transaction. Each
//! decrement re-checks the amount in the same statement that writes it, so a
//! concurrent order that drained the row in between makes the whole placement fail
//! with `InsufficientStock` instead of driving the stock negative.

use crate::catalog;
use crate::inventory::ledger;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, OrderRequest, StockKey, UserId};
use crate::orders::OrderError;
use shop_gateway::Resource;
use sqlx::SqliteConnection;
use tracing::{debug, warn};

/// Shape checks that need no store access.
pub fn check_request(request: &OrderRequest) -> Result<(), OrderError> {
    if request.items.is_empty() {
        return Err(OrderError::ValidationError("order has no items".into()));
    }
    for line in &request.items {
        if line.amount <= 0 {
            return Err(OrderError::ValidationError(format!(
                "amount must be positive for {}",
                line.product_id
            )));
        }
        if line.price < 0 {
            return Err(OrderError::ValidationError(format!(
                "price must not be negative for {}",
                line.product_id
            )));
        }
    }
    Ok(())
}

/// Verifies the outlet and that every line is in stock. The first failing line aborts.
pub async fn check_availability(conn: &mut SqliteConnection, request: &OrderRequest) -> Result<(), OrderError> {
    if !catalog::outlet_exists(conn, request.sales_outlet_id).await? {
        warn!(outlet = %request.sales_outlet_id, "Unknown outlet");
        return Err(OrderError::ValidationError("sales outlet does not exist".into()));
    }

    for line in &request.items {
        let stock = catalog::product_stock(conn, request.sales_outlet_id, line.product_id).await?;
        let available = stock
            .iter()
            .any(|item| item.size == line.size && item.amount >= line.amount);
        if !available {
            warn!(product = %line.product_id, size = line.size, amount = line.amount, "Not in stock");
            return Err(OrderError::ValidationError("product does not exist in the stock".into()));
        }
    }
    Ok(())
}

/// Writes the order through `conn`, which must be an open transaction.
///
/// On error nothing has been committed; dropping the transaction discards the
/// partial writes.
pub(crate) async fn persist_order(
    conn: &mut SqliteConnection,
    user_id: UserId,
    request: &OrderRequest,
) -> Result<OrderId, OrderError> {
    let header = OrderCreate {
        user_id,
        sales_outlet_id: request.sales_outlet_id,
    };
    let order_id = Order::insert(conn, &header).await?;
    debug!(order = %order_id, "Order header written");

    for line in &request.items {
        let key = StockKey::new(request.sales_outlet_id, line.product_id, line.size);
        ledger::decrement_stock(conn, &key, line.amount).await?;

        let item = OrderItemCreate {
            order_id,
            product_id: line.product_id,
            amount: line.amount,
            price: line.price,
            size: line.size,
        };
        OrderItem::insert(conn, &item).await?;
    }
    Ok(order_id)
}

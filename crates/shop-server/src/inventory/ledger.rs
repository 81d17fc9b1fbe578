//! Stock row primitives.
//!
//! Every quantity change is a single guarded `UPDATE`, so a check and its write can
//! never be split by a concurrent transaction. `amount >= 0` also holds at the schema
//! level.

use crate::inventory::InventoryError;
use crate::model::{OutletId, ProductId, StockItem, StockKey};
use shop_gateway::GatewayError;
use sqlx::SqliteConnection;
use tracing::{debug, warn};

/// Current amount of a stock row, `None` when the row does not exist.
pub async fn stock_amount(conn: &mut SqliteConnection, key: &StockKey) -> Result<Option<i64>, GatewayError> {
    let amount = sqlx::query_scalar(
        "SELECT amount FROM product_stock WHERE sales_outlet_id = ? AND product_id = ? AND size = ?",
    )
    .bind(key.sales_outlet_id)
    .bind(key.product_id)
    .bind(key.size)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(amount)
}

/// Creates a stock row. Fails with `AlreadyExists` if the key is taken.
pub async fn insert_stock(conn: &mut SqliteConnection, item: &StockItem) -> Result<(), InventoryError> {
    if item.amount < 0 {
        return Err(InventoryError::ValidationError("amount must not be negative".into()));
    }
    let result = sqlx::query(
        "INSERT INTO product_stock (sales_outlet_id, product_id, size, amount) VALUES (?, ?, ?, ?) \
         ON CONFLICT (sales_outlet_id, product_id, size) DO NOTHING",
    )
    .bind(item.sales_outlet_id)
    .bind(item.product_id)
    .bind(item.size)
    .bind(item.amount)
    .execute(&mut *conn)
    .await
    .map_err(GatewayError::from)?;

    if result.rows_affected() == 0 {
        return Err(InventoryError::AlreadyExists(format!(
            "stock item already exists: {} size {} at {}",
            item.product_id, item.size, item.sales_outlet_id
        )));
    }
    Ok(())
}

/// Takes `amount` units out of a stock row.
///
/// The sufficiency check is part of the `UPDATE` itself. When it fails nothing is
/// written and `InsufficientStock` is returned; the caller's transaction decides
/// whether to roll back.
pub async fn decrement_stock(conn: &mut SqliteConnection, key: &StockKey, amount: i64) -> Result<(), InventoryError> {
    if amount <= 0 {
        return Err(InventoryError::ValidationError("amount must be positive".into()));
    }
    let result = sqlx::query(
        "UPDATE product_stock SET amount = amount - ? \
         WHERE sales_outlet_id = ? AND product_id = ? AND size = ? AND amount >= ?",
    )
    .bind(amount)
    .bind(key.sales_outlet_id)
    .bind(key.product_id)
    .bind(key.size)
    .bind(amount)
    .execute(&mut *conn)
    .await
    .map_err(GatewayError::from)?;

    if result.rows_affected() == 0 {
        let available = stock_amount(conn, key).await?;
        warn!(?key, amount, ?available, "Stock decrement refused");
        return Err(InventoryError::InsufficientStock(format!(
            "{} size {} at {}: requested {}, available {}",
            key.product_id,
            key.size,
            key.sales_outlet_id,
            amount,
            available.unwrap_or(0)
        )));
    }
    debug!(?key, amount, "Stock decremented");
    Ok(())
}

/// Puts `amount` units back. Returns `false` when the row no longer exists.
///
/// Every call adds again: callers run it exactly once per deleted line item.
pub async fn increment_stock(conn: &mut SqliteConnection, key: &StockKey, amount: i64) -> Result<bool, GatewayError> {
    let result = sqlx::query(
        "UPDATE product_stock SET amount = amount + ? \
         WHERE sales_outlet_id = ? AND product_id = ? AND size = ?",
    )
    .bind(amount)
    .bind(key.sales_outlet_id)
    .bind(key.product_id)
    .bind(key.size)
    .execute(&mut *conn)
    .await?;
    debug!(?key, amount, restocked = result.rows_affected() > 0, "Stock incremented");
    Ok(result.rows_affected() > 0)
}

/// Sets the absolute amount of a row. Returns `false` when the row does not exist.
pub async fn set_stock_amount(conn: &mut SqliteConnection, key: &StockKey, amount: i64) -> Result<bool, InventoryError> {
    if amount < 0 {
        return Err(InventoryError::ValidationError("amount must not be negative".into()));
    }
    let result = sqlx::query(
        "UPDATE product_stock SET amount = ? WHERE sales_outlet_id = ? AND product_id = ? AND size = ?",
    )
    .bind(amount)
    .bind(key.sales_outlet_id)
    .bind(key.product_id)
    .bind(key.size)
    .execute(&mut *conn)
    .await
    .map_err(GatewayError::from)?;
    Ok(result.rows_affected() > 0)
}

/// Removes every size of `product` at `outlet`, returning how many rows went away.
pub async fn delete_stock(conn: &mut SqliteConnection, outlet: OutletId, product: ProductId) -> Result<u64, GatewayError> {
    let result = sqlx::query("DELETE FROM product_stock WHERE sales_outlet_id = ? AND product_id = ?")
        .bind(outlet)
        .bind(product)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

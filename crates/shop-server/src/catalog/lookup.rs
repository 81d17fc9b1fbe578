//! Read-only precondition queries.
//!
//! Absence is an answer here, not an error: an unknown outlet yields `false` and a
//! product without stock yields an empty list. Only store failures surface as `Err`.

use crate::model::{OutletId, ProductId, StockItem, StockListing};
use shop_gateway::GatewayError;
use sqlx::SqliteConnection;

pub async fn outlet_exists(conn: &mut SqliteConnection, id: OutletId) -> Result<bool, GatewayError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM sales_outlet WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

pub async fn product_exists(conn: &mut SqliteConnection, id: ProductId) -> Result<bool, GatewayError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM product WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

/// Every size of `product` stocked at `outlet`, smallest size first.
pub async fn product_stock(
    conn: &mut SqliteConnection,
    outlet: OutletId,
    product: ProductId,
) -> Result<Vec<StockItem>, GatewayError> {
    let items = sqlx::query_as::<_, StockItem>(
        "SELECT sales_outlet_id, product_id, size, amount FROM product_stock \
         WHERE sales_outlet_id = ? AND product_id = ? ORDER BY size",
    )
    .bind(outlet)
    .bind(product)
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

/// Every stock row of `outlet` joined with its product.
pub async fn outlet_stock(conn: &mut SqliteConnection, outlet: OutletId) -> Result<Vec<StockListing>, GatewayError> {
    let items = sqlx::query_as::<_, StockListing>(
        "SELECT s.sales_outlet_id, s.product_id, p.name AS product_name, p.description, p.price, \
         s.size, s.amount \
         FROM product_stock s JOIN product p ON p.id = s.product_id \
         WHERE s.sales_outlet_id = ? ORDER BY p.name, s.size",
    )
    .bind(outlet)
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

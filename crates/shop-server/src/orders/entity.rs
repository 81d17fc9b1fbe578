//! Resource implementations for [`Order`] and [`OrderItem`].
//!
//! The delete hooks put the stock of every removed line item back. They run inside
//! the repository's delete transaction, so the restock and the row removal commit
//! or roll back together.

use crate::inventory::ledger;
use crate::model::{
    Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, OrderItemId, OrderStatusUpdate,
    OutletId, StockKey, INITIAL_ORDER_STATUS,
};
use async_trait::async_trait;
use shop_gateway::{GatewayError, Resource};
use sqlx::SqliteConnection;
use std::convert::Infallible;
use tracing::warn;

#[async_trait]
impl Resource for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatusUpdate;

    const TABLE: &'static str = "\"order\"";
    const COLUMNS: &'static str = "id, user_id, sales_outlet_id, created_at, status_name";
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    async fn insert(conn: &mut SqliteConnection, params: &OrderCreate) -> Result<OrderId, GatewayError> {
        let result = sqlx::query(r#"INSERT INTO "order" (user_id, sales_outlet_id, status_name) VALUES (?, ?, ?)"#)
            .bind(params.user_id)
            .bind(params.sales_outlet_id)
            .bind(INITIAL_ORDER_STATUS)
            .execute(&mut *conn)
            .await?;
        Ok(OrderId(result.last_insert_rowid()))
    }

    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &OrderId,
        update: &OrderStatusUpdate,
    ) -> Result<(), GatewayError> {
        sqlx::query(r#"UPDATE "order" SET status_name = ? WHERE id = ?"#)
            .bind(&update.status)
            .bind(*id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn on_update(&self, _conn: &mut SqliteConnection, update: &OrderStatusUpdate) -> Result<(), GatewayError> {
        let status = update.status.as_str();
        if status.trim().is_empty() {
            return Err(GatewayError::Rejected("order status is required".into()));
        }
        if status == self.status_name {
            return Err(GatewayError::Rejected(format!("order status is same {status}")));
        }
        Ok(())
    }

    async fn on_delete(&self, conn: &mut SqliteConnection) -> Result<(), GatewayError> {
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, amount, price, size FROM order_item WHERE order_id = ?",
        )
        .bind(self.id)
        .fetch_all(&mut *conn)
        .await?;

        for item in &items {
            restock(conn, self.sales_outlet_id, item).await?;
        }
        sqlx::query("DELETE FROM order_item WHERE order_id = ?")
            .bind(self.id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for OrderItem {
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Update = Infallible;

    const TABLE: &'static str = "order_item";
    const COLUMNS: &'static str = "id, order_id, product_id, amount, price, size";

    async fn insert(conn: &mut SqliteConnection, params: &OrderItemCreate) -> Result<OrderItemId, GatewayError> {
        let result = sqlx::query(
            "INSERT INTO order_item (order_id, product_id, amount, price, size) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(params.order_id)
        .bind(params.product_id)
        .bind(params.amount)
        .bind(params.price)
        .bind(params.size)
        .execute(&mut *conn)
        .await?;
        Ok(OrderItemId(result.last_insert_rowid()))
    }

    // Line items are immutable once placed.
    async fn apply_update(
        _conn: &mut SqliteConnection,
        _id: &OrderItemId,
        update: &Infallible,
    ) -> Result<(), GatewayError> {
        match *update {}
    }

    async fn on_delete(&self, conn: &mut SqliteConnection) -> Result<(), GatewayError> {
        let outlet: OutletId = sqlx::query_scalar(r#"SELECT sales_outlet_id FROM "order" WHERE id = ?"#)
            .bind(self.order_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| GatewayError::not_found("Order", self.order_id))?;
        restock(conn, outlet, self).await
    }
}

/// Reverses the decrement made when `item` was placed. A stock row that has since
/// been removed is skipped with a warning.
async fn restock(conn: &mut SqliteConnection, outlet: OutletId, item: &OrderItem) -> Result<(), GatewayError> {
    let key = StockKey::new(outlet, item.product_id, item.size);
    if !ledger::increment_stock(conn, &key, item.amount).await? {
        warn!(order_item = %item.id, ?key, amount = item.amount, "Stock row missing, restock skipped");
    }
    Ok(())
}

//! Read models for order listings.

use crate::model::{Order, OrderId, OrderItemDetails, OrderItemId, OutletId, UserId, UserOrder};
use shop_gateway::GatewayError;
use sqlx::SqliteConnection;

/// A user's orders with the outlet address resolved, newest first.
pub async fn user_orders(conn: &mut SqliteConnection, user: UserId) -> Result<Vec<UserOrder>, GatewayError> {
    let orders = sqlx::query_as::<_, UserOrder>(
        r#"SELECT o.id, o.user_id, o.sales_outlet_id, so.address AS sales_outlet_address,
                  o.created_at, o.status_name
           FROM "order" o JOIN sales_outlet so ON so.id = o.sales_outlet_id
           WHERE o.user_id = ?
           ORDER BY o.created_at DESC, o.id DESC"#,
    )
    .bind(user)
    .fetch_all(&mut *conn)
    .await?;
    Ok(orders)
}

pub async fn outlet_orders(conn: &mut SqliteConnection, outlet: OutletId) -> Result<Vec<Order>, GatewayError> {
    let orders = sqlx::query_as::<_, Order>(
        r#"SELECT id, user_id, sales_outlet_id, created_at, status_name
           FROM "order" WHERE sales_outlet_id = ?
           ORDER BY created_at DESC, id DESC"#,
    )
    .bind(outlet)
    .fetch_all(&mut *conn)
    .await?;
    Ok(orders)
}

/// Line items of an order with product name and first image.
pub async fn order_items(conn: &mut SqliteConnection, order: OrderId) -> Result<Vec<OrderItemDetails>, GatewayError> {
    let items = sqlx::query_as::<_, OrderItemDetails>(
        "SELECT oi.id, oi.order_id, oi.product_id, p.name AS product_name,
                (SELECT pi.image_path FROM product_image pi
                 WHERE pi.product_id = oi.product_id ORDER BY pi.id LIMIT 1) AS product_image,
                oi.amount, oi.price, oi.size
         FROM order_item oi JOIN product p ON p.id = oi.product_id
         WHERE oi.order_id = ?
         ORDER BY oi.id",
    )
    .bind(order)
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

/// The order a line item belongs to, `None` when the item does not exist.
pub async fn order_of_item(
    conn: &mut SqliteConnection,
    item: OrderItemId,
) -> Result<Option<Order>, GatewayError> {
    let order = sqlx::query_as::<_, Order>(
        r#"SELECT o.id, o.user_id, o.sales_outlet_id, o.created_at, o.status_name
           FROM "order" o JOIN order_item oi ON oi.order_id = o.id
           WHERE oi.id = ?"#,
    )
    .bind(item)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(order)
}

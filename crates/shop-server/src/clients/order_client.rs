//! # Order Client
//!
//! Placement, listing, status updates and deletion of orders. Deletions go through
//! the generic repository; the restock happens in the `on_delete` hooks of
//! [`Order`] and [`OrderItem`].
use crate::catalog;
use crate::model::{
    Order, OrderId, OrderItem, OrderItemDetails, OrderItemId, OrderRequest, OrderStatusUpdate,
    OutletId, UserId, UserOrder,
};
use crate::orders::{queries, workflow, OrderError};
use async_trait::async_trait;
use shop_gateway::{GatewayError, ResourceClient, ResourceRepository};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceRepository<Order>,
    items: ResourceRepository<OrderItem>,
}

impl OrderClient {
    pub fn new(inner: ResourceRepository<Order>, items: ResourceRepository<OrderItem>) -> Self {
        Self { inner, items }
    }

    /// Places an order for `user_id`.
    ///
    /// Outlet and stock are checked first, then header, items and stock decrements
    /// are written in one transaction.
    #[instrument(skip(self, request), fields(outlet = %request.sales_outlet_id, lines = request.items.len()))]
    pub async fn create_order(&self, user_id: UserId, request: OrderRequest) -> Result<OrderId, OrderError> {
        debug!(?request, "create_order called");
        workflow::check_request(&request)?;
        {
            let mut conn = self.inner.gateway().acquire().await?;
            workflow::check_availability(&mut conn, &request).await?;
        }

        let mut tx = self.inner.gateway().begin_write().await?;
        let order_id = match workflow::persist_order(&mut tx, user_id, &request).await {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Order rolled back");
                return Err(e);
            }
        };
        tx.commit().await?;

        info!(order = %order_id, %user_id, "Order placed");
        Ok(order_id)
    }

    #[instrument(skip(self))]
    pub async fn user_orders(&self, user: UserId) -> Result<Vec<UserOrder>, OrderError> {
        let mut conn = self.inner.gateway().acquire().await?;
        Ok(queries::user_orders(&mut conn, user).await?)
    }

    /// Orders placed at `outlet`. An unknown outlet is a validation error.
    #[instrument(skip(self))]
    pub async fn outlet_orders(&self, outlet: OutletId) -> Result<Vec<Order>, OrderError> {
        let mut conn = self.inner.gateway().acquire().await?;
        if !catalog::outlet_exists(&mut conn, outlet).await? {
            return Err(OrderError::ValidationError("sales outlet does not exist".into()));
        }
        Ok(queries::outlet_orders(&mut conn, outlet).await?)
    }

    /// Line items of an existing order.
    #[instrument(skip(self))]
    pub async fn order_items(&self, order: OrderId) -> Result<Vec<OrderItemDetails>, OrderError> {
        self.require(order).await?;
        let mut conn = self.inner.gateway().acquire().await?;
        Ok(queries::order_items(&mut conn, order).await?)
    }

    /// The order a line item belongs to.
    #[instrument(skip(self))]
    pub async fn order_of_item(&self, item: OrderItemId) -> Result<Order, OrderError> {
        let mut conn = self.inner.gateway().acquire().await?;
        queries::order_of_item(&mut conn, item)
            .await?
            .ok_or_else(|| GatewayError::not_found("OrderItem", item).into())
    }

    /// Sets a new status. The same status as the current one is rejected.
    #[instrument(skip(self))]
    pub async fn update_order_status(&self, id: OrderId, status: String) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.inner.update(id, OrderStatusUpdate { status }).await?)
    }

    /// Deletes one line item and puts its amount back into stock.
    #[instrument(skip(self))]
    pub async fn delete_order_item(&self, id: OrderItemId) -> Result<(), OrderError> {
        debug!("Sending request");
        Ok(self.items.delete(id).await?)
    }
}

#[async_trait]
impl ResourceClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceRepository<Order> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        OrderError::from(e)
    }
}

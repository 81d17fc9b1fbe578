//! # Inventory Client
//!
//! Standalone stock operations for sellers and admins. Each call runs in its own
//! transaction; the order workflow uses [`ledger`] directly inside its own.
use crate::catalog;
use crate::inventory::{ledger, InventoryError};
use crate::model::{OutletId, ProductId, StockItem, StockKey};
use shop_gateway::{Gateway, GatewayError};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct InventoryClient {
    gateway: Gateway,
}

impl InventoryClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Creates a stock row. The outlet and product must exist and the key must be free.
    #[instrument(skip(self))]
    pub async fn add_stock_item(&self, item: StockItem) -> Result<(), InventoryError> {
        debug!("Sending request");
        let mut tx = self.gateway.begin_write().await?;
        if !catalog::outlet_exists(&mut tx, item.sales_outlet_id).await? {
            return Err(GatewayError::not_found("SalesOutlet", item.sales_outlet_id).into());
        }
        if !catalog::product_exists(&mut tx, item.product_id).await? {
            return Err(GatewayError::not_found("Product", item.product_id).into());
        }
        ledger::insert_stock(&mut tx, &item).await?;
        tx.commit().await.map_err(GatewayError::from)?;
        info!(key = ?item.key(), amount = item.amount, "Stock item added");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn stock_level(&self, key: StockKey) -> Result<Option<i64>, InventoryError> {
        let mut conn = self.gateway.acquire().await?;
        Ok(ledger::stock_amount(&mut conn, &key).await?)
    }

    /// Takes `amount` out of a row, failing with `InsufficientStock` if it holds less.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, key: StockKey, amount: i64) -> Result<(), InventoryError> {
        let mut tx = self.gateway.begin_write().await?;
        ledger::decrement_stock(&mut tx, &key, amount).await?;
        tx.commit().await.map_err(GatewayError::from)?;
        info!(?key, amount, "Stock decremented");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn increment_stock(&self, key: StockKey, amount: i64) -> Result<(), InventoryError> {
        if amount <= 0 {
            return Err(InventoryError::ValidationError("amount must be positive".into()));
        }
        let mut tx = self.gateway.begin_write().await?;
        if !ledger::increment_stock(&mut tx, &key, amount).await? {
            warn!(?key, "Not found");
            return Err(stock_not_found(&key));
        }
        tx.commit().await.map_err(GatewayError::from)?;
        info!(?key, amount, "Stock incremented");
        Ok(())
    }

    /// Sets the absolute amount of an existing row.
    #[instrument(skip(self))]
    pub async fn update_stock_amount(&self, key: StockKey, amount: i64) -> Result<(), InventoryError> {
        debug!("Sending request");
        let mut tx = self.gateway.begin_write().await?;
        if !ledger::set_stock_amount(&mut tx, &key, amount).await? {
            warn!(?key, "Not found");
            return Err(stock_not_found(&key));
        }
        tx.commit().await.map_err(GatewayError::from)?;
        info!(?key, amount, "Stock amount set");
        Ok(())
    }

    /// Removes every size of `product` at `outlet`. `NotFound` when there was none.
    #[instrument(skip(self))]
    pub async fn delete_stock_item(&self, outlet: OutletId, product: ProductId) -> Result<(), InventoryError> {
        debug!("Sending request");
        let mut tx = self.gateway.begin_write().await?;
        let removed = ledger::delete_stock(&mut tx, outlet, product).await?;
        if removed == 0 {
            warn!(%outlet, %product, "Not found");
            return Err(InventoryError::NotFound(format!(
                "stock item not found: {product} at {outlet}"
            )));
        }
        tx.commit().await.map_err(GatewayError::from)?;
        info!(%outlet, %product, removed, "Stock item deleted");
        Ok(())
    }
}

fn stock_not_found(key: &StockKey) -> InventoryError {
    InventoryError::NotFound(format!(
        "stock item not found: {} size {} at {}",
        key.product_id, key.size, key.sales_outlet_id
    ))
}

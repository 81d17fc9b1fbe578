//! # Outlet Client
//!
//! Sales outlet management plus the catalog lookups the order flow depends on.
use crate::catalog::{self, CatalogError};
use crate::model::{
    OutletCreate, OutletId, OutletUpdate, ProductId, SalesOutlet, StockItem, StockListing,
};
use async_trait::async_trait;
use shop_gateway::{GatewayError, ResourceClient, ResourceRepository};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct OutletClient {
    inner: ResourceRepository<SalesOutlet>,
}

impl OutletClient {
    pub fn new(inner: ResourceRepository<SalesOutlet>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_outlet(&self, params: OutletCreate) -> Result<OutletId, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_outlet(&self, id: OutletId, update: OutletUpdate) -> Result<SalesOutlet, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn outlet_exists(&self, id: OutletId) -> Result<bool, CatalogError> {
        let mut conn = self.inner.gateway().acquire().await?;
        Ok(catalog::outlet_exists(&mut conn, id).await?)
    }

    /// Stock rows of one product at one outlet. Empty when there are none.
    #[instrument(skip(self))]
    pub async fn product_stock(&self, outlet: OutletId, product: ProductId) -> Result<Vec<StockItem>, CatalogError> {
        let mut conn = self.inner.gateway().acquire().await?;
        Ok(catalog::product_stock(&mut conn, outlet, product).await?)
    }

    /// Everything stocked at `outlet`. Unknown outlets are `NotFound`.
    #[instrument(skip(self))]
    pub async fn outlet_stock(&self, outlet: OutletId) -> Result<Vec<StockListing>, CatalogError> {
        let mut conn = self.inner.gateway().acquire().await?;
        if !catalog::outlet_exists(&mut conn, outlet).await? {
            warn!(%outlet, "Not found");
            return Err(GatewayError::not_found("SalesOutlet", outlet).into());
        }
        Ok(catalog::outlet_stock(&mut conn, outlet).await?)
    }
}

#[async_trait]
impl ResourceClient<SalesOutlet> for OutletClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceRepository<SalesOutlet> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        CatalogError::from(e)
    }
}

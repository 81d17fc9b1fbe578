//! # Product Client
//!
//! Wraps a `ResourceRepository<Product>` and attaches image paths to the rows it
//! returns.
use crate::catalog::entity::product_images;
use crate::catalog::CatalogError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use shop_gateway::{GatewayError, ResourceClient, ResourceRepository};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceRepository<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceRepository<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let product = self.inner.update(id, update).await?;
        self.with_images(product).await
    }

    /// A product with its images, `NotFound` if absent.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let product = self.require(id).await?;
        self.with_images(product).await
    }

    /// Every product ordered by name, each with its images.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.list().await?;
        let rows: Vec<(ProductId, String)> =
            sqlx::query_as("SELECT product_id, image_path FROM product_image ORDER BY id")
                .fetch_all(self.inner.gateway().pool())
                .await
                .map_err(GatewayError::from)?;

        let mut images: HashMap<ProductId, Vec<String>> = HashMap::new();
        for (product_id, path) in rows {
            images.entry(product_id).or_default().push(path);
        }
        for product in &mut products {
            product.images = images.remove(&product.id).unwrap_or_default();
        }
        info!(count = products.len(), "Products listed");
        Ok(products)
    }

    async fn with_images(&self, mut product: Product) -> Result<Product, CatalogError> {
        let mut conn = self.inner.gateway().acquire().await?;
        product.images = product_images(&mut conn, product.id).await?;
        Ok(product)
    }
}

#[async_trait]
impl ResourceClient<Product> for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceRepository<Product> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        CatalogError::from(e)
    }
}

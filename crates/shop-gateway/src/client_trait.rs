//! # ResourceClient Trait
//!
//! Provides a common interface for domain-specific clients, adding default `get`,
//! `require`, `list` and `delete` methods built on top of a generic
//! [`ResourceRepository`].
use crate::{GatewayError, Resource, ResourceRepository};
use async_trait::async_trait;

/// Trait for domain clients to inherit standard read/delete operations.
///
/// A client only has to expose its inner repository and say how gateway errors
/// translate into its own error type.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct OutletClient {
///     inner: ResourceRepository<SalesOutlet>,
/// }
///
/// #[async_trait]
/// impl ResourceClient<SalesOutlet> for OutletClient {
///     type Error = CatalogError;
///
///     fn inner(&self) -> &ResourceRepository<SalesOutlet> {
///         &self.inner
///     }
///
///     fn map_error(e: GatewayError) -> Self::Error {
///         CatalogError::from(e)
///     }
/// }
///
/// // get(), require(), list() and delete() are provided automatically.
/// let outlets = client.list().await?;
/// ```
#[async_trait]
pub trait ResourceClient<T: Resource>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic repository.
    fn inner(&self) -> &ResourceRepository<T>;

    /// Map gateway errors to the domain error type.
    fn map_error(e: GatewayError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID, failing with the domain's not-found error.
    #[tracing::instrument(skip(self))]
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        self.inner().require(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

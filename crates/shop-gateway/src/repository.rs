//! # Generic Repository
//!
//! This module defines the `ResourceRepository`, the component that executes the
//! standard lifecycle operations for any [`Resource`]. It is the only place where
//! generic `SELECT`/`DELETE` statements are assembled.

use crate::entity::{entity_type, Resource};
use crate::error::GatewayError;
use crate::gateway::Gateway;
use sqlx::SqliteConnection;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// The generic repository that manages one table.
///
/// ## ResourceRepository
///
/// `ResourceRepository<T>` runs CRUD operations for `T: Resource` against the shared
/// [`Gateway`]. It holds no state of its own beyond the gateway handle, so it is cheap
/// to clone and safe to share across request tasks.
///
/// # Operations
///
/// * **Create**:
///     1. Opens a transaction.
///     2. Calls the `on_create` hook.
///     3. Calls `T::insert` and commits.
///     4. Returns the new ID.
///
/// * **Get**: Fetches the row by ID, `None` if absent.
///
/// * **List**: Fetches every row ordered by `T::ORDER_BY`.
///
/// * **Update**:
///     1. Opens a transaction and loads the current row (`NotFound` if absent).
///     2. Calls the `on_update` hook, then `T::apply_update`.
///     3. Commits and returns the fresh row.
///
/// * **Delete**:
///     1. Opens a transaction and loads the current row (`NotFound` if absent).
///     2. Calls the `on_delete` hook.
///     3. Deletes the row and commits.
pub struct ResourceRepository<T: Resource> {
    gateway: Gateway,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceRepository<T> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> ResourceRepository<T> {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            _marker: PhantomData,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, GatewayError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");

        let mut tx = self.gateway.begin_write().await?;
        if let Err(e) = T::on_create(&mut tx, &params).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(e);
        }
        let id = match T::insert(&mut tx, &params).await {
            Ok(id) => id,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(e);
            }
        };
        tx.commit().await?;

        info!(entity_type, %id, "Created");
        Ok(id)
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, GatewayError> {
        let mut conn = self.gateway.acquire().await?;
        let item = fetch_by_id::<T>(&mut conn, &id).await?;
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        Ok(item)
    }

    /// Like [`get`](Self::get) but turns a missing row into `NotFound`.
    pub async fn require(&self, id: T::Id) -> Result<T, GatewayError> {
        let entity_type = entity_type::<T>();
        match self.get(id.clone()).await? {
            Some(item) => Ok(item),
            None => {
                warn!(entity_type, %id, "Not found");
                Err(GatewayError::not_found(entity_type, id))
            }
        }
    }

    pub async fn exists(&self, id: T::Id) -> Result<bool, GatewayError> {
        Ok(self.get(id).await?.is_some())
    }

    pub async fn list(&self) -> Result<Vec<T>, GatewayError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            T::COLUMNS,
            T::TABLE,
            T::ORDER_BY
        );
        let items = sqlx::query_as::<_, T>(&sql)
            .fetch_all(self.gateway.pool())
            .await?;
        debug!(entity_type = entity_type::<T>(), count = items.len(), "List");
        Ok(items)
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, GatewayError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?update, "Update");

        let mut tx = self.gateway.begin_write().await?;
        let Some(current) = fetch_by_id::<T>(&mut tx, &id).await? else {
            warn!(entity_type, %id, "Not found");
            return Err(GatewayError::not_found(entity_type, id));
        };
        if let Err(e) = current.on_update(&mut tx, &update).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(e);
        }
        T::apply_update(&mut tx, &id, &update).await?;
        let updated = fetch_by_id::<T>(&mut tx, &id)
            .await?
            .ok_or_else(|| GatewayError::not_found(entity_type, &id))?;
        tx.commit().await?;

        info!(entity_type, %id, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), GatewayError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Delete");

        let mut tx = self.gateway.begin_write().await?;
        let Some(current) = fetch_by_id::<T>(&mut tx, &id).await? else {
            warn!(entity_type, %id, "Not found");
            return Err(GatewayError::not_found(entity_type, id));
        };
        if let Err(e) = current.on_delete(&mut tx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(e);
        }
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        sqlx::query(&sql).bind(id.clone()).execute(&mut *tx).await?;
        tx.commit().await?;

        info!(entity_type, %id, "Deleted");
        Ok(())
    }
}

/// Loads one row of `T` through an existing connection or transaction.
pub async fn fetch_by_id<T: Resource>(
    conn: &mut SqliteConnection,
    id: &T::Id,
) -> Result<Option<T>, GatewayError> {
    let sql = format!("SELECT {} FROM {} WHERE id = ?", T::COLUMNS, T::TABLE);
    let item = sqlx::query_as::<_, T>(&sql)
        .bind(id.clone())
        .fetch_optional(&mut *conn)
        .await?;
    Ok(item)
}

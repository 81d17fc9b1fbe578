//! # Resource Trait
//!
//! The `Resource` trait defines the contract that every persisted row type (Product,
//! SalesOutlet, Order, User, …) must implement to be managed by the generic
//! [`ResourceRepository`](crate::ResourceRepository). It specifies associated types for
//! IDs and DTOs, the table it lives in, and lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`) that run inside the same transaction as the write they guard.
//!
//! # Architecture Note
//! Every resource gets the same get/list/create/update/delete plumbing. The
//! repository is written *once* against this trait; a resource only says how to
//! insert and update its own columns and which invariants to check.
//!
//! Associated types keep the payloads apart: an `Order` repository only accepts an
//! `OrderCreate`, never a `ProductCreate`.
//!
//! # Provided Methods (Hooks)
//! - [`Resource::on_create`]
//! - [`Resource::on_update`]
//! - [`Resource::on_delete`]
//!
//! The defaults do nothing (`Ok(())`).

use crate::error::GatewayError;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Sqlite, SqliteConnection};
use std::fmt::{Debug, Display};

/// Trait that any persisted entity must implement to be managed by `ResourceRepository`.
///
/// # Hooks & Transactions
/// Hooks receive the connection of the enclosing transaction. A hook that returns an
/// error aborts the operation and the transaction is rolled back, so checks done in a
/// hook and the write that follows are atomic.
#[async_trait]
pub trait Resource: for<'r> FromRow<'r, SqliteRow> + Clone + Debug + Send + Sync + Unpin + 'static {
    /// The primary key (a newtype over `i64` for every table in this workspace).
    type Id: Clone
        + Debug
        + Display
        + Send
        + Sync
        + for<'q> sqlx::Encode<'q, Sqlite>
        + sqlx::Type<Sqlite>
        + 'static;

    /// The data required to create a new row (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing row.
    type Update: Send + Sync + Debug;

    /// Table name, quoted when it is a reserved word.
    const TABLE: &'static str;

    /// Column list selected for `FromRow`.
    const COLUMNS: &'static str;

    /// `ORDER BY` clause used by `list`.
    const ORDER_BY: &'static str = "id";

    /// Inserts the row and returns its new id.
    async fn insert(conn: &mut SqliteConnection, params: &Self::Create) -> Result<Self::Id, GatewayError>;

    /// Writes `update` to the row identified by `id`. The row is known to exist.
    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &Self::Id,
        update: &Self::Update,
    ) -> Result<(), GatewayError>;

    // --- Lifecycle Hooks (Async) ---

    /// Called before the insert. Use it for uniqueness or reference checks.
    async fn on_create(_conn: &mut SqliteConnection, _params: &Self::Create) -> Result<(), GatewayError> {
        Ok(())
    }

    /// Called with the current row before the update is written.
    async fn on_update(
        &self,
        _conn: &mut SqliteConnection,
        _update: &Self::Update,
    ) -> Result<(), GatewayError> {
        Ok(())
    }

    /// Called with the current row immediately before it is deleted.
    async fn on_delete(&self, _conn: &mut SqliteConnection) -> Result<(), GatewayError> {
        Ok(())
    }
}

/// Short type name (e.g. "Product" instead of "shop_server::model::product::Product").
pub fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

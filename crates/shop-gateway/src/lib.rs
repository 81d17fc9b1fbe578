//! # Shop Gateway
//!
//! This crate is the persistence layer of the shop backend. It executes parameterized
//! queries and transactions against an SQLite store and owns no business logic.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`Resource`]) - how one table is read, inserted and updated
//! 2. **Runtime Layer** ([`ResourceRepository`], [`Gateway`]) - pooling, transactions, generic CRUD
//! 3. **Interface Layer** ([`ResourceClient`]) - domain clients that inherit reads and deletes
//!
//! You describe a table **once** in the `Resource` impl and the repository provides
//! get/list/create/update/delete, each create/update/delete running in its own
//! transaction together with the resource's lifecycle hooks.
//!
//! ## Transactions
//!
//! Multi-statement workflows (placing an order, restocking) take a transaction from
//! [`Gateway::begin_write`] and pass `&mut *tx` to each step. A transaction dropped without
//! commit is rolled back, which is also what happens when a request is cancelled.
//!
//! ## Testing
//!
//! [`testing::memory_gateway`] opens an in-memory database with a schema applied, so
//! integration tests need no external service.

pub mod client_trait;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod repository;
pub mod testing;
pub mod tracing;

// Re-export core types for convenience
pub use client_trait::ResourceClient;
pub use entity::{entity_type, Resource};
pub use error::GatewayError;
pub use gateway::{Gateway, GatewayConfig};
pub use repository::{fetch_by_id, ResourceRepository};

//! # Test Fixtures
//!
//! Helpers for running tests against a private in-memory database instead of a
//! database file.
//!
//! | Feature | `memory_gateway` | File database |
//! |---------|------------------|---------------|
//! | **Speed** | Instant | Disk I/O |
//! | **Isolation** | One database per call | Shared between runs |
//! | **Concurrency** | Serialized on one connection | Real writer contention |
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn test_something() {
//!     let gateway = memory_gateway(SCHEMA).await.unwrap();
//!     // ...
//! }
//! ```

use crate::error::GatewayError;
use crate::gateway::Gateway;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a fresh in-memory database and applies `schema` to it.
///
/// Each in-memory SQLite connection is its own database, so the pool is pinned to a
/// single connection that is never recycled. Concurrent callers queue for it, which
/// serializes their transactions.
pub async fn memory_gateway(schema: &str) -> Result<Gateway, GatewayError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    let gateway = Gateway::from_pool(pool);
    gateway.apply_schema(schema).await?;
    Ok(gateway)
}

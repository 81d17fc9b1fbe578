//! # Connection Pool & Transactions
//!
//! This module defines the `Gateway`, the only component that talks to the
//! relational store. Every read goes through its pool and every multi-statement
//! write goes through a transaction obtained from [`Gateway::begin_write`].
//!
//! ## Concurrency Model
//!
//! The gateway holds no in-process state besides the pool. Request tasks run in
//! parallel and the store is the single synchronization point: a transaction that
//! is dropped without [`commit`](sqlx::Transaction::commit) is rolled back, so a
//! request future cancelled mid-transaction never leaves a partial write behind.
//!
//! Write transactions start with `BEGIN IMMEDIATE` and take the write lock up
//! front. A deferred transaction that reads first cannot be upgraded once another
//! writer has committed; SQLite then fails it with `SQLITE_BUSY` without consulting
//! the busy timeout. Taking the lock at `BEGIN` makes competing writers queue on
//! the busy timeout instead.

use crate::error::GatewayError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for the store.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// An sqlx SQLite URL, e.g. `sqlite://shop.db` or `sqlite::memory:`.
    pub database_url: String,
    pub max_connections: u32,
    /// How long a writer waits for a competing writer before failing.
    pub busy_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://shop.db".to_string(),
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Handle to the relational store.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct Gateway {
    pool: SqlitePool,
}

impl Gateway {
    /// Opens a pool according to `config`, creating the database file if needed.
    pub async fn connect(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(
            url = %config.database_url,
            max_connections = config.max_connections,
            "Gateway connected"
        );
        Ok(Self { pool })
    }

    /// Wraps an already configured pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Checks out a single connection for a sequence of reads.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, GatewayError> {
        Ok(self.pool.acquire().await?)
    }

    /// Starts a write transaction holding the database write lock. Dropping it
    /// without committing rolls it back.
    pub async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, GatewayError> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Applies a schema script. Statements must be idempotent (`IF NOT EXISTS`).
    pub async fn apply_schema(&self, schema: &str) -> Result<(), GatewayError> {
        debug!("Applying schema");
        sqlx::raw_sql(schema).execute(&self.pool).await?;
        info!("Schema applied");
        Ok(())
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Gateway closed");
    }
}

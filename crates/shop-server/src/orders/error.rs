//! Error types for orders.

use crate::inventory::InventoryError;
use shop_gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order or order item was not found.
    #[error("{0}")]
    NotFound(String),

    /// There is insufficient stock to fulfill the order.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// The request was rejected before anything was written.
    #[error("{0}")]
    ValidationError(String),

    /// An underlying database error occurred.
    #[error("Order database error: {0}")]
    DatabaseError(String),
}

impl From<GatewayError> for OrderError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::NotFound { .. } => OrderError::NotFound(e.to_string()),
            GatewayError::Conflict(msg) | GatewayError::Rejected(msg) => OrderError::ValidationError(msg),
            GatewayError::Database(err) => OrderError::DatabaseError(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(e: sqlx::Error) -> Self {
        GatewayError::from(e).into()
    }
}

impl From<InventoryError> for OrderError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::InsufficientStock(msg) => OrderError::InsufficientStock(msg),
            InventoryError::NotFound(msg) => OrderError::NotFound(msg),
            InventoryError::AlreadyExists(msg) | InventoryError::ValidationError(msg) => {
                OrderError::ValidationError(msg)
            }
            InventoryError::DatabaseError(msg) => OrderError::DatabaseError(msg),
        }
    }
}

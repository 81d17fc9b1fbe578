//! Error types for the inventory ledger.

use shop_gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur during stock operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The stock row, outlet or product was not found.
    #[error("{0}")]
    NotFound(String),

    /// A stock row for the same outlet, product and size already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// The row holds less than the requested amount.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// The supplied data is invalid.
    #[error("Stock validation error: {0}")]
    ValidationError(String),

    /// An underlying database error occurred.
    #[error("Stock database error: {0}")]
    DatabaseError(String),
}

impl From<GatewayError> for InventoryError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::NotFound { .. } => InventoryError::NotFound(e.to_string()),
            GatewayError::Conflict(msg) => InventoryError::AlreadyExists(msg),
            GatewayError::Rejected(msg) => InventoryError::ValidationError(msg),
            GatewayError::Database(err) => InventoryError::DatabaseError(err.to_string()),
        }
    }
}

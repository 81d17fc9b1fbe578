//! Error types for the catalog.

use shop_gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur during product and outlet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product or outlet was not found.
    #[error("{0}")]
    NotFound(String),

    /// A product name or outlet address is already taken.
    #[error("{0}")]
    AlreadyExists(String),

    /// The supplied data is invalid.
    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    /// An underlying database error occurred.
    #[error("Catalog database error: {0}")]
    DatabaseError(String),
}

impl From<GatewayError> for CatalogError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::NotFound { .. } => CatalogError::NotFound(e.to_string()),
            GatewayError::Conflict(msg) => CatalogError::AlreadyExists(msg),
            GatewayError::Rejected(msg) => CatalogError::ValidationError(msg),
            GatewayError::Database(err) => CatalogError::DatabaseError(err.to_string()),
        }
    }
}

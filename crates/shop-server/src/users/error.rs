//! Error types for user accounts.

use shop_gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("{0}")]
    NotFound(String),

    /// The email address is already registered.
    #[error("{0}")]
    AlreadyExists(String),

    #[error("User validation error: {0}")]
    ValidationError(String),

    #[error("User database error: {0}")]
    DatabaseError(String),
}

impl From<GatewayError> for UserError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::NotFound { .. } => UserError::NotFound(e.to_string()),
            GatewayError::Conflict(msg) => UserError::AlreadyExists(msg),
            GatewayError::Rejected(msg) => UserError::ValidationError(msg),
            GatewayError::Database(err) => UserError::DatabaseError(err.to_string()),
        }
    }
}

//! # Gateway Errors
//!
//! This module defines the error type shared by every query and transaction the
//! gateway executes. Domain crates map it into their own error enums.

/// Errors that can occur within the persistence gateway itself.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Conflict: {0}")]
    Conflict(String),
    /// A lifecycle hook refused the operation.
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl GatewayError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True for the "row absent" family of failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                GatewayError::Conflict(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                GatewayError::Conflict(format!("still referenced: {}", db.message()))
            }
            _ => GatewayError::Database(err),
        }
    }
}

//! Error types for authentication and authorization.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    /// No identity on an operation that needs one.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// The identity's role is not allowed to perform the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The token is malformed, expired, or of the wrong kind.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Unknown email or wrong password. The two are not told apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Hashing or signing failed.
    #[error("Access internal error: {0}")]
    Internal(String),
}

/// Errors of the account flows (register, login, refresh, password change).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    User(#[from] crate::users::UserError),
}

impl From<shop_gateway::GatewayError> for AuthError {
    fn from(e: shop_gateway::GatewayError) -> Self {
        AuthError::User(e.into())
    }
}

//! Maps domain errors to HTTP responses.

use crate::access::{AccessError, AuthError};
use crate::catalog::CatalogError;
use crate::inventory::InventoryError;
use crate::orders::OrderError;
use crate::users::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// An error as seen by an HTTP client.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    /// Duplicate creation and insufficient stock.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(detail) => {
                error!(%detail, "Request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, message).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(msg) => ApiError::NotFound(msg),
            CatalogError::AlreadyExists(msg) => ApiError::Conflict(msg),
            CatalogError::ValidationError(msg) => ApiError::Validation(msg),
            CatalogError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::NotFound(msg) => ApiError::NotFound(msg),
            InventoryError::AlreadyExists(msg) => ApiError::Conflict(msg),
            InventoryError::InsufficientStock(_) => ApiError::Conflict(e.to_string()),
            InventoryError::ValidationError(msg) => ApiError::Validation(msg),
            InventoryError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(msg) => ApiError::NotFound(msg),
            OrderError::InsufficientStock(_) => ApiError::Conflict(e.to_string()),
            OrderError::ValidationError(msg) => ApiError::Validation(msg),
            OrderError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(msg) => ApiError::NotFound(msg),
            UserError::AlreadyExists(msg) => ApiError::Conflict(msg),
            UserError::ValidationError(msg) => ApiError::Validation(msg),
            UserError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::Unauthenticated(msg) | AccessError::InvalidToken(msg) => ApiError::Unauthenticated(msg),
            AccessError::InvalidCredentials => ApiError::Unauthenticated(e.to_string()),
            AccessError::Forbidden(msg) => ApiError::Forbidden(msg),
            AccessError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Access(e) => e.into(),
            AuthError::User(e) => e.into(),
        }
    }
}

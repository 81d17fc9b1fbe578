//! # Access Gate
//!
//! Turns a bearer credential into a [`RequestContext`] and checks it against the role
//! an operation requires.
//!
//! The context is an ordinary value handed from the HTTP extractor to each handler.
//! Nothing reads identity from ambient state, so the checks below are plain functions
//! of the context and the required role, and can be tested without a request.
//!
//! Two outcomes are distinguished:
//! - no resolvable identity on a protected operation: [`AccessError::Unauthenticated`]
//! - an identity whose role ranks too low: [`AccessError::Forbidden`]

pub mod error;
pub mod password;
pub mod token;

pub use error::*;
pub use token::{Claims, TokenKind, TokenService};

use crate::model::{Role, UserId};

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
}

/// Per-request caller information.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    identity: Option<Identity>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The caller's role, `Anonymous` without an identity.
    pub fn role(&self) -> Role {
        self.identity.as_ref().map_or(Role::Anonymous, |i| i.role)
    }

    /// Requires an identity ranking at least `required`.
    pub fn require(&self, required: Role) -> Result<&Identity, AccessError> {
        let identity = self.authenticated_identity()?;
        if !has_permission(identity.role, required) {
            return Err(AccessError::Forbidden(format!("{required} role required")));
        }
        Ok(identity)
    }

    /// Requires an identity whose role is exactly one of `allowed`.
    pub fn require_one_of(&self, allowed: &[Role]) -> Result<&Identity, AccessError> {
        let identity = self.authenticated_identity()?;
        if !allowed.contains(&identity.role) {
            return Err(AccessError::Forbidden("insufficient permissions".into()));
        }
        Ok(identity)
    }

    /// Lets `owner` through, otherwise requires a role ranking at least `required`.
    pub fn require_owner_or(&self, owner: UserId, required: Role) -> Result<&Identity, AccessError> {
        let identity = self.authenticated_identity()?;
        if identity.user_id != owner && !has_permission(identity.role, required) {
            return Err(AccessError::Forbidden("insufficient permissions".into()));
        }
        Ok(identity)
    }

    fn authenticated_identity(&self) -> Result<&Identity, AccessError> {
        self.identity
            .as_ref()
            .ok_or_else(|| AccessError::Unauthenticated("authentication required".into()))
    }
}

/// True when `actual` ranks at least as high as `required`.
pub fn has_permission(actual: Role, required: Role) -> bool {
    actual.has_permission(required)
}

//! Bearer-token extraction.

use crate::access::RequestContext;
use crate::http::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::convert::Infallible;
use tracing::debug;

/// Never rejects: a missing or invalid token yields an anonymous context, and the
/// handler decides whether that is enough.
#[axum::async_trait]
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Ok(RequestContext::anonymous());
        };
        match state.auth_client.authenticate(token.trim()) {
            Ok(identity) => Ok(RequestContext::authenticated(identity)),
            Err(e) => {
                debug!(error = %e, "Bearer token ignored");
                Ok(RequestContext::anonymous())
            }
        }
    }
}

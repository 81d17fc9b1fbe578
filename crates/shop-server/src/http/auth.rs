//! Registration, login and token endpoints.

use crate::access::RequestContext;
use crate::http::{ApiError, AppState, Envelope};
use crate::model::{AuthResponse, ChangePasswordRequest, LoginRequest, RefreshRequest, RegisterRequest, Role, User};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

pub async fn register(
    State(system): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let response = system.auth_client.register(body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(system): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    Ok(Json(system.auth_client.login(body).await?))
}

pub async fn refresh(
    State(system): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    Ok(Json(system.auth_client.refresh(&body.refresh_token).await?))
}

/// Tokens are stateless; the client discards them.
pub async fn logout() -> Json<Value> {
    Json(json!({ "message": "logged out successfully" }))
}

pub async fn change_password(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let identity = ctx.require(Role::User)?;
    system.auth_client.change_password(identity.user_id, body).await?;
    Ok(StatusCode::OK)
}

pub async fn profile(
    State(system): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Envelope<User>>, ApiError> {
    let identity = ctx.require(Role::User)?;
    Ok(Envelope::one(system.auth_client.profile(identity.user_id).await?))
}

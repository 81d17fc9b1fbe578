//! User administration endpoints.

use crate::access::RequestContext;
use crate::http::{ApiError, AppState, Envelope};
use crate::model::{EmailLookup, NewUserRequest, ProfileUpdate, Role, RoleUpdate, User, UserId, UserUpdate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shop_gateway::ResourceClient;

pub async fn list_users(
    State(system): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Envelope<Vec<User>>>, ApiError> {
    ctx.require(Role::Admin)?;
    Ok(Envelope::list(system.user_client.list().await?))
}

pub async fn get_user(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<UserId>,
) -> Result<Json<Envelope<User>>, ApiError> {
    ctx.require_owner_or(id, Role::Admin)?;
    Ok(Envelope::one(system.user_client.require(id).await?))
}

pub async fn user_by_email(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<EmailLookup>,
) -> Result<Json<Envelope<User>>, ApiError> {
    ctx.require(Role::Admin)?;
    Ok(Envelope::one(system.user_client.user_by_email(&body.email).await?))
}

pub async fn add_user(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<NewUserRequest>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system
        .auth_client
        .create_account(body.name, body.surname, body.email, body.phone, body.password, body.role)
        .await?;
    Ok(StatusCode::CREATED)
}

/// Updates profile fields of the user named in the body.
pub async fn update_user(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<ProfileUpdate>,
) -> Result<StatusCode, ApiError> {
    ctx.require_owner_or(body.id, Role::Admin)?;
    let update = UserUpdate {
        name: body.name,
        surname: body.surname,
        email: body.email,
        phone: body.phone,
        ..UserUpdate::default()
    };
    system.user_client.update_user(body.id, update).await?;
    Ok(StatusCode::OK)
}

pub async fn update_user_role(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<UserId>,
    Json(body): Json<RoleUpdate>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.user_client.update_role(id, body.role).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_user(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<UserId>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.user_client.delete(id).await?;
    Ok(StatusCode::OK)
}

//! Order endpoints.
//!
//! Listing and status changes are for sellers and admins only. Reading or deleting a
//! single order is also open to the user who placed it.

use crate::access::RequestContext;
use crate::http::{ApiError, AppState, Envelope};
use crate::model::{
    Order, OrderId, OrderItemDetails, OrderItemId, OrderRequest, OrderStatusUpdate, OutletId, Role,
    UserId, UserOrder,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shop_gateway::ResourceClient;

const STAFF_ROLES: [Role; 2] = [Role::Seller, Role::Admin];

pub async fn list_orders(
    State(system): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    ctx.require_one_of(&STAFF_ROLES)?;
    Ok(Envelope::list(system.order_client.list().await?))
}

pub async fn order_details(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<OrderId>,
) -> Result<Json<Envelope<Vec<OrderItemDetails>>>, ApiError> {
    ctx.require(Role::User)?;
    let order = system.order_client.require(id).await?;
    ctx.require_owner_or(order.user_id, Role::Seller)?;
    Ok(Envelope::list(system.order_client.order_items(id).await?))
}

pub async fn user_orders(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(user): Path<UserId>,
) -> Result<Json<Envelope<Vec<UserOrder>>>, ApiError> {
    ctx.require_owner_or(user, Role::Seller)?;
    Ok(Envelope::list(system.order_client.user_orders(user).await?))
}

pub async fn outlet_orders(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(outlet): Path<OutletId>,
) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    ctx.require_one_of(&STAFF_ROLES)?;
    Ok(Envelope::list(system.order_client.outlet_orders(outlet).await?))
}

/// Places an order for the authenticated caller.
pub async fn create_order(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<OrderRequest>,
) -> Result<StatusCode, ApiError> {
    let identity = ctx.require(Role::User)?;
    system.order_client.create_order(identity.user_id, body).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update_order_status(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<OrderId>,
    Json(body): Json<OrderStatusUpdate>,
) -> Result<StatusCode, ApiError> {
    ctx.require_one_of(&STAFF_ROLES)?;
    system.order_client.update_order_status(id, body.status).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_order(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<OrderId>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::User)?;
    let order = system.order_client.require(id).await?;
    ctx.require_owner_or(order.user_id, Role::Seller)?;
    system.order_client.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_order_item(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<OrderItemId>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::User)?;
    let order = system.order_client.order_of_item(id).await?;
    ctx.require_owner_or(order.user_id, Role::Seller)?;
    system.order_client.delete_order_item(id).await?;
    Ok(StatusCode::OK)
}

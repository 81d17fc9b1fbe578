//! Product and outlet endpoints.

use crate::http::{ApiError, AppState, Envelope};
use crate::access::RequestContext;
use crate::model::{
    OutletCreate, OutletId, OutletUpdate, Product, ProductCreate, ProductId, ProductUpdate, Role,
    SalesOutlet,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shop_gateway::ResourceClient;

pub async fn list_products(State(system): State<AppState>) -> Result<Json<Envelope<Vec<Product>>>, ApiError> {
    Ok(Envelope::list(system.product_client.products().await?))
}

pub async fn get_product(
    State(system): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    Ok(Envelope::one(system.product_client.product(id).await?))
}

pub async fn add_product(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<ProductCreate>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.product_client.create_product(body).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update_product(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<ProductId>,
    Json(body): Json<ProductUpdate>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.product_client.update_product(id, body).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_product(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.product_client.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn list_outlets(State(system): State<AppState>) -> Result<Json<Envelope<Vec<SalesOutlet>>>, ApiError> {
    Ok(Envelope::list(system.outlet_client.list().await?))
}

pub async fn get_outlet(
    State(system): State<AppState>,
    Path(id): Path<OutletId>,
) -> Result<Json<Envelope<SalesOutlet>>, ApiError> {
    Ok(Envelope::one(system.outlet_client.require(id).await?))
}

pub async fn add_outlet(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<OutletCreate>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.outlet_client.create_outlet(body).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update_outlet(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<OutletId>,
    Json(body): Json<OutletUpdate>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.outlet_client.update_outlet(id, body).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_outlet(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<OutletId>,
) -> Result<StatusCode, ApiError> {
    ctx.require(Role::Admin)?;
    system.outlet_client.delete(id).await?;
    Ok(StatusCode::OK)
}

//! Stock listing and correction endpoints.

use crate::access::RequestContext;
use crate::http::{ApiError, AppState, Envelope};
use crate::model::{OutletId, ProductId, Role, StockItem, StockKey, StockListing};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

const STOCK_ROLES: [Role; 2] = [Role::Seller, Role::Admin];

pub async fn outlet_stock(
    State(system): State<AppState>,
    Path(outlet): Path<OutletId>,
) -> Result<Json<Envelope<Vec<StockListing>>>, ApiError> {
    Ok(Envelope::list(system.outlet_client.outlet_stock(outlet).await?))
}

pub async fn product_stock(
    State(system): State<AppState>,
    Path((outlet, product)): Path<(OutletId, ProductId)>,
) -> Result<Json<Envelope<Vec<StockItem>>>, ApiError> {
    Ok(Envelope::list(system.outlet_client.product_stock(outlet, product).await?))
}

pub async fn add_stock_item(
    State(system): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<StockItem>,
) -> Result<StatusCode, ApiError> {
    ctx.require_one_of(&STOCK_ROLES)?;
    system.inventory_client.add_stock_item(body).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update_stock_amount(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path((outlet, product, amount, size)): Path<(OutletId, ProductId, i64, i64)>,
) -> Result<StatusCode, ApiError> {
    ctx.require_one_of(&STOCK_ROLES)?;
    system
        .inventory_client
        .update_stock_amount(StockKey::new(outlet, product, size), amount)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn delete_stock_item(
    State(system): State<AppState>,
    ctx: RequestContext,
    Path((outlet, product)): Path<(OutletId, ProductId)>,
) -> Result<StatusCode, ApiError> {
    ctx.require_one_of(&STOCK_ROLES)?;
    system.inventory_client.delete_stock_item(outlet, product).await?;
    Ok(StatusCode::OK)
}

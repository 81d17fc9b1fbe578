//! # HTTP Surface
//!
//! axum router over a shared [`ShopSystem`]. Public reads need no credentials;
//! everything under `/api/v1/` except registration and login checks the caller's
//! [`RequestContext`](crate::access::RequestContext) in the handler.
//!
//! ## Responses
//!
//! - reads: `{"success": true, "data": ..., "count": n}`
//! - mutations: bare `201 Created` or `200 OK`
//! - errors: plain-text message with the status of [`ApiError`]

mod auth;
mod catalog;
mod context;
mod envelope;
mod error;
mod orders;
mod stock;
mod users;

pub use envelope::Envelope;
pub use error::ApiError;

use crate::lifecycle::ShopSystem;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub type AppState = Arc<ShopSystem>;

/// Builds the full route table.
pub fn router(system: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // catalog
        .route("/product/list", get(catalog::list_products))
        .route("/product/:id", get(catalog::get_product))
        .route("/api/v1/product/add", post(catalog::add_product))
        .route("/api/v1/product/update/:id", post(catalog::update_product))
        .route("/api/v1/product/delete/:id", delete(catalog::delete_product))
        .route("/outlet/list", get(catalog::list_outlets))
        .route("/outlet/:id", get(catalog::get_outlet))
        .route("/api/v1/outlet/add", post(catalog::add_outlet))
        .route("/api/v1/outlet/update/:id", post(catalog::update_outlet))
        .route("/api/v1/outlet/delete/:id", delete(catalog::delete_outlet))
        // stock
        .route("/products/outlet/:id", get(stock::outlet_stock))
        .route("/product/outlet/:outlet_id/:product_id", get(stock::product_stock))
        .route("/api/v1/stock/add", post(stock::add_stock_item))
        .route(
            "/api/v1/stock/update/:outlet_id/:product_id/:amount/:size",
            post(stock::update_stock_amount),
        )
        .route("/api/v1/stock/delete/:outlet_id/:product_id", delete(stock::delete_stock_item))
        // orders
        .route("/api/v1/orders/list", get(orders::list_orders))
        .route("/api/v1/orders/:id", get(orders::order_details))
        .route("/api/v1/users/:id/orders", get(orders::user_orders))
        .route("/api/v1/sales-outlets/:id/orders", get(orders::outlet_orders))
        .route("/api/v1/order", post(orders::create_order))
        .route("/api/v1/order/:id", delete(orders::delete_order))
        .route("/api/v1/order/:id/status", patch(orders::update_order_status))
        .route("/api/v1/order-items/:id", delete(orders::delete_order_item))
        // users
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::add_user).put(users::update_user),
        )
        .route("/api/v1/users/by-email", post(users::user_by_email))
        .route("/api/v1/users/:id", get(users::get_user).delete(users::delete_user))
        .route("/api/v1/users/:id/role", patch(users::update_user_role))
        // auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route("/api/v1/auth/profile", get(auth::profile))
        .with_state(system)
}

/// Serves the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, system: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(system))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

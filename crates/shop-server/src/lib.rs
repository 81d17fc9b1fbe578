//! # Shop Server
//!
//! Retail backend: products, sales outlets, per-size stock, orders, users and
//! authentication, served over HTTP.
//!
//! ## Layout
//!
//! - **[catalog]**, **[inventory]**, **[orders]**, **[users]**: domain logic. Row types
//!   implement [`Resource`](shop_gateway::Resource) so the generic repository handles
//!   their CRUD; the hooks carry the invariants.
//! - **[access]**: roles, tokens and password hashing.
//! - **[clients]**: typed clients over the repositories.
//! - **[lifecycle]**: [`ShopSystem`](lifecycle::ShopSystem) wires the clients.
//! - **[http]**: the axum router.
//!
//! ## Order placement
//!
//! Outlet and stock are checked up front. The header, the line items and the stock
//! decrements are then written in one transaction, where each decrement re-checks
//! the available amount. A concurrent order that drains the stock in between makes
//! the later order fail as a whole.

pub mod access;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod http;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod schema;
pub mod users;

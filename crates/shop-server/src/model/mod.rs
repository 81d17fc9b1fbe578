//! Plain data structures shared by the domain modules and the HTTP surface.
//!
//! Every row type derives `sqlx::FromRow` so the gateway can load it directly, and
//! `serde` so handlers can return it as JSON.

mod order;
mod outlet;
mod product;
mod role;
mod stock;
mod user;

pub use order::*;
pub use outlet::*;
pub use product::*;
pub use role::*;
pub use stock::*;
pub use user::*;

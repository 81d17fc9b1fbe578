//! Type-safe clients over the repositories. Handlers and the lifecycle only talk to
//! these.

mod auth_client;
mod inventory_client;
mod order_client;
mod outlet_client;
mod product_client;
mod user_client;

pub use auth_client::*;
pub use inventory_client::*;
pub use order_client::*;
pub use outlet_client::*;
pub use product_client::*;
pub use user_client::*;

//! Inventory ledger: the per-outlet, per-size stock quantity of every product.
//!
//! The functions in [`ledger`] take a connection so the order workflow can run them
//! inside its own transaction. The [`InventoryClient`](crate::clients::InventoryClient)
//! wraps them for standalone stock corrections.

pub mod error;
pub mod ledger;

pub use error::*;

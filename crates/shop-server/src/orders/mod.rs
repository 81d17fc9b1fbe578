//! Order workflow: placement with atomic stock decrement, status updates, and
//! deletion with restock.

pub mod entity;
pub mod error;
pub mod queries;
pub mod workflow;

pub use error::*;

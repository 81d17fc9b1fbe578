//! Catalog: products, sales outlets and the read-only lookups the order flow uses
//! as preconditions.

pub mod entity;
pub mod error;
pub mod lookup;

pub use error::*;
pub use lookup::*;

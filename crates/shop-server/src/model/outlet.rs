use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for sales outlets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct OutletId(pub i64);

impl Display for OutletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "outlet_{}", self.0)
    }
}

/// A physical or logical sales location holding its own stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalesOutlet {
    pub id: OutletId,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletCreate {
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletUpdate {
    pub address: String,
}

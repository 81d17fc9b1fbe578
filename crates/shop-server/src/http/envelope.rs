use axum::Json;
use serde::Serialize;

/// Success body of every read endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub count: usize,
}

impl<T: Serialize> Envelope<Vec<T>> {
    pub fn list(items: Vec<T>) -> Json<Self> {
        Json(Envelope {
            success: true,
            count: items.len(),
            data: items,
        })
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn one(item: T) -> Json<Self> {
        Json(Envelope {
            success: true,
            data: item,
            count: 1,
        })
    }
}

//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by the server binary and tests.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); generic
//! repository operations carry an `entity_type` field instead.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -p shop-server
//!
//! # Full payloads at function entry
//! RUST_LOG=debug cargo run -p shop-server
//!
//! # Only the gateway
//! RUST_LOG=shop_gateway=debug cargo run -p shop-server
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO create_order: Order placed order=order_1 user_id=user_1 outlet=outlet_1 lines=2
//! INFO create_product: Created entity_type="Product" id=product_3
//! WARN delete_order_item: Stock row missing, restock skipped order_item=order_item_4 key=StockKey { sales_outlet_id: OutletId(1), product_id: ProductId(2), size: 42 } amount=2 id=OrderItemId(4)
//! ```

/// Initializes structured logging filtered by `RUST_LOG`.
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}

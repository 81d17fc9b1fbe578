//! # System Lifecycle
//!
//! [`ShopSystem`] wires every client over one shared [`Gateway`](shop_gateway::Gateway)
//! and owns its shutdown. The binary builds one at start-up, hands it to the HTTP
//! router as state and shuts it down once the server has stopped.
//!
//! Tracing is set up separately with [`shop_gateway::tracing::setup_tracing`] so tests
//! can build systems without touching the global subscriber.

pub mod shop_system;

pub use shop_system::*;

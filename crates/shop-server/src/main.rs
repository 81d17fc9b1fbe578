//! # Shop Server
//!
//! Parses configuration, connects to the store and serves the HTTP API until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use shop_gateway::tracing::setup_tracing;
use shop_server::config::ServerConfig;
use shop_server::http;
use shop_server::lifecycle::ShopSystem;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let config = ServerConfig::parse();

    info!(database = %config.database_url, bind = %config.bind, "Starting shop server");

    let system = ShopSystem::connect(&config.gateway_config(), &config.auth_settings())
        .await
        .context("connecting to the store")?;
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!(addr = %listener.local_addr()?, "Listening");

    let state = Arc::new(system);
    http::serve(listener, state.clone(), shutdown_signal())
        .await
        .context("serving HTTP")?;

    match Arc::try_unwrap(state) {
        Ok(system) => system.shutdown().await,
        Err(state) => {
            warn!("Requests still hold the system, closing the pool directly");
            state.gateway().close().await;
        }
    }

    info!("Shop server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

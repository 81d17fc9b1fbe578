//! Command-line and environment configuration of the server binary.

use crate::lifecycle::AuthSettings;
use clap::Parser;
use shop_gateway::GatewayConfig;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "shop-server", version, about = "Retail shop backend")]
pub struct ServerConfig {
    /// sqlx SQLite URL of the store.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://shop.db")]
    pub database_url: String,

    /// Address the HTTP server listens on.
    #[arg(long, env = "SHOP_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Secret used to sign access and refresh tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(long, env = "SHOP_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    #[arg(long, default_value_t = 24)]
    pub access_token_hours: i64,

    #[arg(long, default_value_t = 168)]
    pub refresh_token_hours: i64,
}

impl ServerConfig {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            jwt_secret: self.jwt_secret.clone(),
            access_ttl: chrono::Duration::hours(self.access_token_hours),
            refresh_ttl: chrono::Duration::hours(self.refresh_token_hours),
        }
    }
}

use crate::access::TokenService;
use crate::clients::{
    AuthClient, InventoryClient, OrderClient, OutletClient, ProductClient, UserClient,
};
use crate::schema::SCHEMA;
use chrono::Duration;
use shop_gateway::{Gateway, GatewayConfig, GatewayError, ResourceRepository};
use tracing::info;

/// Token signing settings.
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl AuthSettings {
    /// Access tokens for 24 hours, refresh tokens for 7 days.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_ttl: Duration::hours(24),
            refresh_ttl: Duration::days(7),
        }
    }
}

/// The shop's runtime: one client per concern, all sharing the same pool.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::connect(&config, &AuthSettings::new(secret)).await?;
///
/// let outlet = system.outlet_client.create_outlet(outlet_data).await?;
/// let order = system.order_client.create_order(user_id, request).await?;
///
/// system.shutdown().await;
/// ```
#[derive(Clone)]
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub outlet_client: OutletClient,
    pub inventory_client: InventoryClient,
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub auth_client: AuthClient,
    gateway: Gateway,
}

impl ShopSystem {
    /// Builds every client over `gateway`. The schema must already be applied.
    pub fn new(gateway: Gateway, auth: &AuthSettings) -> Self {
        let tokens = TokenService::new(auth.jwt_secret.as_bytes(), auth.access_ttl, auth.refresh_ttl);
        let user_client = UserClient::new(ResourceRepository::new(gateway.clone()));

        Self {
            product_client: ProductClient::new(ResourceRepository::new(gateway.clone())),
            outlet_client: OutletClient::new(ResourceRepository::new(gateway.clone())),
            inventory_client: InventoryClient::new(gateway.clone()),
            order_client: OrderClient::new(
                ResourceRepository::new(gateway.clone()),
                ResourceRepository::new(gateway.clone()),
            ),
            auth_client: AuthClient::new(user_client.clone(), tokens),
            user_client,
            gateway,
        }
    }

    /// Connects to the store described by `config`, applies the schema and builds
    /// the system.
    pub async fn connect(config: &GatewayConfig, auth: &AuthSettings) -> Result<Self, GatewayError> {
        let gateway = Gateway::connect(config).await?;
        gateway.apply_schema(SCHEMA).await?;
        info!("Shop system ready");
        Ok(Self::new(gateway, auth))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Closes the pool. Clones of the system still held elsewhere stop working.
    pub async fn shutdown(self) {
        info!("Shutting down shop system");
        self.gateway.close().await;
        info!("Shop system shut down");
    }
}

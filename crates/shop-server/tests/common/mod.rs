#![allow(dead_code)]

use shop_gateway::testing::memory_gateway;
use shop_gateway::{Gateway, GatewayConfig};
use shop_server::lifecycle::{AuthSettings, ShopSystem};
use shop_server::model::{
    OrderLine, OrderRequest, OutletCreate, OutletId, ProductCreate, ProductId, Role, StockItem,
    StockKey, UserCreate, UserId,
};
use shop_server::schema::SCHEMA;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SECRET: &str = "integration-test-secret";

pub async fn system() -> ShopSystem {
    let gateway = memory_gateway(SCHEMA).await.unwrap();
    ShopSystem::new(gateway, &AuthSettings::new(SECRET))
}

/// A system on a fresh database file, so concurrent tasks hold separate
/// connections and really contend for the write lock.
pub async fn file_system(name: &str) -> (ShopSystem, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "shop-{name}-{}-{}.db",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let config = GatewayConfig {
        database_url: format!("sqlite://{}", path.display()),
        max_connections: 8,
        busy_timeout: Duration::from_secs(10),
    };
    let gateway = Gateway::connect(&config).await.unwrap();
    gateway.apply_schema(SCHEMA).await.unwrap();
    (ShopSystem::new(gateway, &AuthSettings::new(SECRET)), path)
}

pub async fn remove_file_system(system: ShopSystem, path: &Path) {
    system.shutdown().await;
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

/// A shop with one customer, one outlet and two stocked products.
pub struct Fixture {
    pub system: ShopSystem,
    pub user: UserId,
    pub outlet: OutletId,
    /// Price 100, size 42, 5 in stock.
    pub boots: ProductId,
    /// Price 5, size 40, 10 in stock.
    pub socks: ProductId,
}

pub async fn fixture() -> Fixture {
    let system = system().await;
    let user = add_user(&system, "ann@example.com", Role::User).await;
    let outlet = system
        .outlet_client
        .create_outlet(OutletCreate {
            address: "Main St 1".into(),
        })
        .await
        .unwrap();
    let boots = add_product(&system, "Boot", 100).await;
    let socks = add_product(&system, "Sock", 5).await;
    add_stock(&system, outlet, boots, 42, 5).await;
    add_stock(&system, outlet, socks, 40, 10).await;

    Fixture {
        system,
        user,
        outlet,
        boots,
        socks,
    }
}

/// Inserts a user directly; the hash is not a real one.
pub async fn add_user(system: &ShopSystem, email: &str, role: Role) -> UserId {
    system
        .user_client
        .create_user(UserCreate {
            name: "Test".into(),
            surname: "User".into(),
            email: email.into(),
            role,
            phone: None,
            password_hash: "not-a-hash".into(),
        })
        .await
        .unwrap()
}

pub async fn add_product(system: &ShopSystem, name: &str, price: i64) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            name: name.into(),
            description: format!("{name} description"),
            price,
            images: vec![format!("/img/{name}-front.png"), format!("/img/{name}-back.png")],
        })
        .await
        .unwrap()
}

pub async fn add_stock(system: &ShopSystem, outlet: OutletId, product: ProductId, size: i64, amount: i64) {
    system
        .inventory_client
        .add_stock_item(StockItem {
            sales_outlet_id: outlet,
            product_id: product,
            size,
            amount,
        })
        .await
        .unwrap();
}

pub async fn stock(system: &ShopSystem, outlet: OutletId, product: ProductId, size: i64) -> Option<i64> {
    system
        .inventory_client
        .stock_level(StockKey::new(outlet, product, size))
        .await
        .unwrap()
}

pub fn order(outlet: OutletId, lines: &[(ProductId, i64, i64)]) -> OrderRequest {
    OrderRequest {
        sales_outlet_id: outlet,
        items: lines
            .iter()
            .map(|&(product_id, size, amount)| OrderLine {
                product_id,
                size,
                amount,
                price: 100,
            })
            .collect(),
    }
}

pub async fn row_count(system: &ShopSystem, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(system.gateway().pool())
        .await
        .unwrap()
}

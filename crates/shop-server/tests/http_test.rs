//! End-to-end tests: a real listener on a random port, driven with reqwest.

mod common;

use common::{fixture, stock, Fixture};
use reqwest::StatusCode;
use serde_json::{json, Value};
use shop_server::http;
use shop_server::lifecycle::ShopSystem;
use shop_server::model::{LoginRequest, Role};
use std::sync::Arc;

/// Bind to port 0 and return the base URL.
async fn start_server(system: ShopSystem) -> String {
    let app = http::router(Arc::new(system));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn account(f: &Fixture, email: &str, role: Role) -> String {
    let auth = &f.system.auth_client;
    auth.create_account("Test".into(), "User".into(), email.into(), None, "secret1".into(), role)
        .await
        .unwrap();
    auth.login(LoginRequest {
        email: email.into(),
        password: "secret1".into(),
    })
    .await
    .unwrap()
    .access_token
}

#[tokio::test]
async fn test_health_and_public_reads() {
    let f = fixture().await;
    let base = start_server(f.system.clone()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);

    let resp = client.get(format!("{base}/product/list")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "Boot");
    assert_eq!(body["data"][0]["images"][0], "/img/Boot-front.png");

    let resp = client
        .get(format!("{base}/products/outlet/{}", f.outlet.0))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][1]["product_name"], "Sock");

    let resp = client.get(format!("{base}/product/999")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roles_are_enforced() {
    let f = fixture().await;
    let user = account(&f, "user@example.com", Role::User).await;
    let admin = account(&f, "admin@example.com", Role::Admin).await;
    let base = start_server(f.system.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/v1/users");

    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // A garbage token is treated like no token at all.
    let resp = client.get(&url).bearer_auth("garbage").send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client.get(&url).bearer_auth(&user).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client.get(&url).bearer_auth(&admin).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 3);
    assert!(body["data"][0].get("password_hash").is_none());

    let resp = client
        .post(format!("{base}/api/v1/outlet/add"))
        .bearer_auth(&user)
        .json(&json!({ "address": "Harbour 2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .post(format!("{base}/api/v1/outlet/add"))
        .bearer_auth(&admin)
        .json(&json!({ "address": "Harbour 2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base}/api/v1/outlet/add"))
        .bearer_auth(&admin)
        .json(&json!({ "address": "Harbour 2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_and_place_order() {
    let f = fixture().await;
    let seller = account(&f, "seller@example.com", Role::Seller).await;
    let base = start_server(f.system.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/v1/auth/register"))
        .json(&json!({
            "email": "bob@example.com",
            "password": "hunter22",
            "name": "Bob",
            "surname": "Jones"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let auth: Value = resp.json().await.unwrap();
    let token = auth["access_token"].as_str().unwrap().to_string();
    let bob = auth["user"]["id"].as_i64().unwrap();
    assert_eq!(auth["user"]["role"], "user");

    let order = json!({
        "sales_outlet_id": f.outlet.0,
        "items": [
            { "product_id": f.boots.0, "size": 42, "amount": 2, "price": 100 },
            { "product_id": f.socks.0, "size": 40, "amount": 3, "price": 5 }
        ]
    });

    let resp = client
        .post(format!("{base}/api/v1/order"))
        .json(&order)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{base}/api/v1/order"))
        .bearer_auth(&token)
        .json(&order)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, Some(3));

    let resp = client
        .get(format!("{base}/api/v1/users/{bob}/orders"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["sales_outlet_address"], "Main St 1");
    assert_eq!(body["data"][0]["status_name"], "ordered");
    let order_id = body["data"][0]["id"].as_i64().unwrap();

    // Someone else's order list is off limits to a plain user.
    let resp = client
        .get(format!("{base}/api/v1/users/{}/orders", f.user.0))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .get(format!("{base}/api/v1/orders/{order_id}"))
        .bearer_auth(&seller)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["product_name"], "Boot");

    let resp = client
        .patch(format!("{base}/api/v1/order/{order_id}/status"))
        .bearer_auth(&seller)
        .json(&json!({ "status": "ordered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.unwrap(), "order status is same ordered");
}

#[tokio::test]
async fn test_unstocked_line_is_rejected_before_writing() {
    let f = fixture().await;
    let user = account(&f, "user@example.com", Role::User).await;
    let base = start_server(f.system.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/v1/order"))
        .bearer_auth(&user)
        .json(&json!({
            "sales_outlet_id": f.outlet.0,
            "items": [{ "product_id": f.boots.0, "size": 42, "amount": 6, "price": 100 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.unwrap(), "product does not exist in the stock");
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, Some(5));

    let resp = client
        .post(format!("{base}/api/v1/order"))
        .bearer_auth(&user)
        .json(&json!({ "sales_outlet_id": f.outlet.0, "items": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.unwrap(), "order has no items");
}

/// Each line passes the availability check on its own, but together they need
/// more than the row holds. The in-transaction decrement catches it.
#[tokio::test]
async fn test_stock_exhausted_during_placement_is_a_conflict() {
    let f = fixture().await;
    let user = account(&f, "user@example.com", Role::User).await;
    let base = start_server(f.system.clone()).await;
    let client = reqwest::Client::new();

    let line = json!({ "product_id": f.boots.0, "size": 42, "amount": 3, "price": 100 });
    let resp = client
        .post(format!("{base}/api/v1/order"))
        .bearer_auth(&user)
        .json(&json!({ "sales_outlet_id": f.outlet.0, "items": [line.clone(), line] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        resp.text().await.unwrap(),
        format!(
            "Insufficient stock: {} size 42 at {}: requested 3, available 2",
            f.boots, f.outlet
        )
    );

    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, Some(5));
    assert_eq!(common::row_count(&f.system, r#""order""#).await, 0);
}

#[tokio::test]
async fn test_seller_manages_stock() {
    let f = fixture().await;
    let seller = account(&f, "seller@example.com", Role::Seller).await;
    let base = start_server(f.system.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/v1/stock/add"))
        .bearer_auth(&seller)
        .json(&json!({
            "sales_outlet_id": f.outlet.0,
            "product_id": f.boots.0,
            "size": 44,
            "amount": 7
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(stock(&f.system, f.outlet, f.boots, 44).await, Some(7));

    let resp = client
        .post(format!("{base}/api/v1/stock/update/{}/{}/9/44", f.outlet.0, f.boots.0))
        .bearer_auth(&seller)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(stock(&f.system, f.outlet, f.boots, 44).await, Some(9));

    let resp = client
        .delete(format!("{base}/api/v1/stock/delete/{}/{}", f.outlet.0, f.boots.0))
        .bearer_auth(&seller)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, None);
    assert_eq!(stock(&f.system, f.outlet, f.boots, 44).await, None);
}

//! Shared helpers for the acceptance tests.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use reqwest::{Client, Response};
use serde_json::{Value, json};

/// Base URL for the server under test (configurable via environment).
pub fn base_url() -> String {
    std::env::var("CARTWHEEL_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A customer name that is unique per test run.
pub fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix}-{nanos}")
}

/// Register a customer via the API.
pub async fn register(client: &Client, name: &str, password: &str) -> Response {
    client
        .post(format!("{}/customers", base_url()))
        .json(&json!({ "name": name, "password": password }))
        .send()
        .await
        .expect("register request")
}

/// Register and log in, returning the access token.
pub async fn register_and_login(client: &Client, name: &str, password: &str) -> String {
    let response = register(client, name, password).await;
    assert_eq!(response.status(), 201, "registration should succeed");
    login_token(client, name, password).await
}

/// Log in and return the access token.
pub async fn login_token(client: &Client, name: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "name": name, "password": password }))
        .send()
        .await
        .expect("login request");
    assert_eq!(response.status(), 200, "login should succeed");

    let body: Value = response.json().await.expect("login response body");
    body["accessToken"]
        .as_str()
        .expect("accessToken field")
        .to_string()
}

/// Create a product via the API, returning its id.
pub async fn create_product(client: &Client, name: &str, price: i64, image_url: &str) -> i64 {
    let response = client
        .post(format!("{}/products", base_url()))
        .json(&json!({ "name": name, "price": price, "imageUrl": image_url }))
        .send()
        .await
        .expect("create product request");
    assert_eq!(response.status(), 201, "product creation should succeed");

    let body: Value = response.json().await.expect("product response body");
    body["id"].as_i64().expect("product id")
}

/// Add a product to the authenticated customer's cart, returning the cart
/// item id.
pub async fn add_cart_item(client: &Client, token: &str, product_id: i64, quantity: i64) -> i64 {
    let response = client
        .post(format!("{}/cart", base_url()))
        .bearer_auth(token)
        .json(&json!({ "productId": product_id, "quantity": quantity }))
        .send()
        .await
        .expect("add cart item request");
    assert_eq!(response.status(), 201, "cart add should succeed");

    let body: Value = response.json().await.expect("cart item response body");
    body["id"].as_i64().expect("cart item id")
}

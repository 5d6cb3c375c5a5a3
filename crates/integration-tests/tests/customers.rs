//! Acceptance tests for registration, login, and the guarded `/customers/me`
//! endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database (migrated via `cartwheel-cli migrate`)
//! - The server running (`cargo run -p cartwheel-server`)
//!
//! Run with: `cargo test -p cartwheel-integration-tests -- --ignored`

mod common;

use reqwest::Client;
use serde_json::{Value, json};

use common::{base_url, login_token, register, register_and_login, unique_name};

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_register_creates_customer() {
    let client = Client::new();
    let name = unique_name("reg");

    let response = register(&client, &name, "pw1234").await;

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Location header");
    assert_eq!(location, format!("/customers/{name}"));
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_register_duplicate_name_rejected() {
    let client = Client::new();
    let name = unique_name("dup");

    let first = register(&client, &name, "pw1").await;
    let second = register(&client, &name, "pw2").await;

    assert_eq!(first.status(), 201);
    assert_eq!(second.status(), 400);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_register_missing_field_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/customers", base_url()))
        .json(&json!({ "name": unique_name("nopw") }))
        .send()
        .await
        .expect("register request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_login_wrong_password_unauthorized() {
    let client = Client::new();
    let name = unique_name("badpw");
    register(&client, &name, "right").await;

    let response = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "name": name, "password": "wrong" }))
        .send()
        .await
        .expect("login request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_me_returns_current_customer() {
    let client = Client::new();
    let name = unique_name("me");
    let token = register_and_login(&client, &name, "pw1234").await;

    let response = client
        .get(format!("{}/customers/me", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("me request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("me response body");
    assert_eq!(body["name"], name.as_str());
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_me_without_token_unauthorized() {
    let client = Client::new();

    let response = client
        .get(format!("{}/customers/me", base_url()))
        .send()
        .await
        .expect("me request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_me_with_garbage_token_unauthorized() {
    let client = Client::new();

    let response = client
        .get(format!("{}/customers/me", base_url()))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("me request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_update_password_changes_login() {
    let client = Client::new();
    let name = unique_name("edit");
    let token = register_and_login(&client, &name, "old-pw").await;

    let response = client
        .put(format!("{}/customers/me", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "name": name, "password": "new-pw" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), 200);

    // The old password no longer works; the new one does.
    let old_login = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "name": name, "password": "old-pw" }))
        .send()
        .await
        .expect("old login request");
    assert_eq!(old_login.status(), 401);

    login_token(&client, &name, "new-pw").await;
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_update_without_token_unauthorized() {
    let client = Client::new();

    let response = client
        .put(format!("{}/customers/me", base_url()))
        .json(&json!({ "name": "whoever", "password": "pw" }))
        .send()
        .await
        .expect("update request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_delete_account() {
    let client = Client::new();
    let name = unique_name("close");
    let token = register_and_login(&client, &name, "pw1234").await;

    let delete_response = client
        .delete(format!("{}/customers/me", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete request");
    assert_eq!(delete_response.status(), 204);

    // The token still verifies, but the subject no longer resolves.
    let me_response = client
        .get(format!("{}/customers/me", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("me request");
    assert_eq!(me_response.status(), 404);
}

#[tokio::test]
#[ignore = "Requires running server and migrated database"]
async fn test_delete_without_token_unauthorized() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/customers/me", base_url()))
        .send()
        .await
        .expect("delete request");

    assert_eq!(response.status(), 401);
}

//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB ping)
//!
//! # Customers
//! POST   /customers            - Register
//! POST   /login                - Authenticate, returns access token
//! GET    /customers/me         - Current customer (auth)
//! PUT    /customers/me         - Change password (auth)
//! DELETE /customers/me         - Close account (auth)
//!
//! # Catalog
//! POST   /products             - Add product
//! GET    /products             - List catalog
//! GET    /products/{id}        - Product detail
//! DELETE /products/{id}        - Remove product
//!
//! # Cart (auth)
//! POST   /cart                 - Add item
//! GET    /cart                 - List items with products
//! DELETE /cart/{id}            - Remove item
//!
//! # Orders (auth)
//! POST   /orders               - Place order from cart items
//! GET    /orders               - List own orders
//! GET    /orders/{id}          - Order detail
//! ```

pub mod auth;
pub mod cart;
pub mod customers;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/", post(customers::register)).route(
        "/me",
        get(customers::me)
            .put(customers::update_me)
            .delete(customers::delete_me),
    )
}

/// Create the catalog routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create).get(products::index))
        .route("/{id}", get(products::show).delete(products::remove))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cart::add).get(cart::index))
        .route("/{id}", axum::routing::delete(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::index))
        .route("/{id}", get(orders::show))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customer_routes())
        .route("/login", post(auth::login))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/orders", order_routes())
}

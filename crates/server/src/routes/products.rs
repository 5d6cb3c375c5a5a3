//! Catalog route handlers.
//!
//! The catalog endpoints are unauthenticated pass-throughs over the product
//! store; browsing works the same logged in or out.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use cartwheel_core::{Price, ProductId};

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::AppJson;
use crate::models::Product;
use crate::state::AppState;

/// Product creation request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateRequest {
    pub name: String,
    pub price: i64,
    pub image_url: String,
}

/// `POST /products` - add a product to the catalog.
pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<ProductCreateRequest>,
) -> Result<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("product name cannot be empty".to_owned()));
    }
    if req.price < 0 {
        return Err(AppError::BadRequest("price cannot be negative".to_owned()));
    }

    let products = ProductRepository::new(state.pool());
    let product = products
        .create(&req.name, Price::from_minor_units(req.price), &req.image_url)
        .await?;

    let location = format!("/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// `GET /products` - list the catalog.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool());
    Ok(Json(products.list().await?))
}

/// `GET /products/{id}` - product detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let products = ProductRepository::new(state.pool());
    let product = products
        .find_by_id(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(product))
}

/// `DELETE /products/{id}` - remove a product from the catalog.
///
/// Cart items and order details keep referenced products alive at the
/// schema level; deleting such a product yields a 400.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode> {
    let products = ProductRepository::new(state.pool());
    products.delete_by_id(ProductId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

//! Cart route handlers. All of them require authentication.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use cartwheel_core::{CartItemId, CustomerId, CustomerName, ProductId};

use crate::db::RepositoryError;
use crate::db::cart_items::CartItemRepository;
use crate::db::customers::CustomerRepository;
use crate::error::{AppError, Result};
use crate::middleware::{AppJson, Principal};
use crate::models::CartLine;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddRequest {
    pub product_id: i32,
    pub quantity: i32,
}

/// `POST /cart` - add a product to the calling customer's cart.
///
/// Adding the same product again creates a second row; quantities are not
/// merged.
pub async fn add(
    State(state): State<AppState>,
    principal: Principal,
    AppJson(req): AppJson<CartAddRequest>,
) -> Result<impl IntoResponse> {
    let name = principal.require()?;

    if req.quantity <= 0 {
        return Err(AppError::BadRequest("quantity must be positive".to_owned()));
    }

    let customer_id = resolve_customer_id(&state, name).await?;

    let cart = CartItemRepository::new(state.pool());
    let item = cart
        .add(customer_id, ProductId::new(req.product_id), req.quantity)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("product {}", req.product_id)),
            other => AppError::Database(other),
        })?;

    let location = format!("/cart/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// `GET /cart` - the calling customer's cart, items joined with products.
pub async fn index(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<CartLine>>> {
    let name = principal.require()?;
    let customer_id = resolve_customer_id(&state, name).await?;

    let cart = CartItemRepository::new(state.pool());
    Ok(Json(cart.list_by_customer(customer_id).await?))
}

/// `DELETE /cart/{id}` - remove an item from the calling customer's cart.
pub async fn remove(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let name = principal.require()?;
    let customer_id = resolve_customer_id(&state, name).await?;

    let cart = CartItemRepository::new(state.pool());
    cart.delete(customer_id, CartItemId::new(id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("cart item {id}")),
            other => AppError::Database(other),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Re-resolve the token subject to a customer id.
///
/// A token for a deleted customer fails here with not-found semantics.
async fn resolve_customer_id(state: &AppState, name: &CustomerName) -> Result<CustomerId> {
    let customers = CustomerRepository::new(state.pool());
    customers
        .find_id_by_name(name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {name}")))
}

//! Order route handlers. All of them require authentication.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use cartwheel_core::{CartItemId, OrderId};

use crate::error::Result;
use crate::middleware::{AppJson, Principal};
use crate::models::OrderView;
use crate::services::orders::OrderService;
use crate::state::AppState;

/// One requested order line: the cart item to consume and the quantity to
/// record. The quantity is taken from this request, not the cart row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub cart_id: i32,
    pub quantity: i32,
}

/// Order creation response body.
#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub id: OrderId,
}

/// `POST /orders` - place an order consuming the given cart items.
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    AppJson(lines): AppJson<Vec<OrderLineRequest>>,
) -> Result<impl IntoResponse> {
    let name = principal.require()?;

    let lines: Vec<(CartItemId, i32)> = lines
        .iter()
        .map(|line| (CartItemId::new(line.cart_id), line.quantity))
        .collect();

    let orders = OrderService::new(state.pool());
    let order_id = orders.place_order(name, &lines).await?;

    tracing::info!(customer = %name, order = %order_id, lines = lines.len(), "order placed");

    let location = format!("/orders/{order_id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OrderCreatedResponse { id: order_id }),
    ))
}

/// `GET /orders/{id}` - one of the calling customer's orders, reconstructed.
pub async fn show(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<Json<OrderView>> {
    let name = principal.require()?;

    let orders = OrderService::new(state.pool());
    Ok(Json(orders.get_order(name, OrderId::new(id)).await?))
}

/// `GET /orders` - every order the calling customer has placed.
pub async fn index(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<OrderView>>> {
    let name = principal.require()?;

    let orders = OrderService::new(state.pool());
    Ok(Json(orders.list_orders(name).await?))
}

//! Customer route handlers: registration and the guarded `/me` endpoints.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use cartwheel_core::CustomerName;

use crate::error::Result;
use crate::middleware::{AppJson, Principal};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
}

/// Password-change request body.
///
/// Mirrors the registration body; a `name` field, if sent, is ignored in
/// favor of the token subject.
#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    pub password: String,
}

/// Current-customer response body.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub name: CustomerName,
}

/// `POST /customers` - register a new customer.
pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), state.tokens());
    let customer = auth.register(&req.name, &req.password).await?;

    tracing::info!(customer = %customer.name, "customer registered");

    let location = format!("/customers/{}", customer.name);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// `GET /customers/me` - the calling customer's profile.
pub async fn me(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<CustomerResponse>> {
    let name = principal.require()?;

    let auth = AuthService::new(state.pool(), state.tokens());
    let customer = auth.find(name).await?;

    Ok(Json(CustomerResponse {
        name: customer.name,
    }))
}

/// `PUT /customers/me` - change the calling customer's password.
pub async fn update_me(
    State(state): State<AppState>,
    principal: Principal,
    AppJson(req): AppJson<UpdateMeRequest>,
) -> Result<StatusCode> {
    let name = principal.require()?;

    let auth = AuthService::new(state.pool(), state.tokens());
    auth.update_password(name, &req.password).await?;

    Ok(StatusCode::OK)
}

/// `DELETE /customers/me` - close the calling customer's account.
pub async fn delete_me(State(state): State<AppState>, principal: Principal) -> Result<StatusCode> {
    let name = principal.require()?;

    let auth = AuthService::new(state.pool(), state.tokens());
    auth.delete(name).await?;

    tracing::info!(customer = %name, "customer account closed");

    Ok(StatusCode::NO_CONTENT)
}

//! JSON body extractor with a 400 rejection.
//!
//! Axum's stock `Json` rejects malformed or incomplete bodies with 422;
//! the API contract wants a plain 400 for a missing required field, so
//! handlers take `AppJson<T>` instead.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON extractor whose rejection maps to `AppError::BadRequest`.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}

//! Product domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cartwheel_core::{Price, ProductId};

/// A catalog product.
///
/// Products have an independent lifecycle: they are referenced, never owned,
/// by cart items and order details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

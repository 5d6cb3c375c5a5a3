//! Cart domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cartwheel_core::{CartItemId, CustomerId, ProductId};

use super::Product;

/// A pending, not-yet-ordered product reference with quantity.
///
/// A cart item belongs to exactly one customer and references exactly one
/// product. Adding the same product twice creates a second row; there is no
/// merge-on-duplicate behavior.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: i32,
    #[serde(skip)]
    pub added_at: DateTime<Utc>,
}

/// A cart item joined with the product it references, for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartItemId,
    pub product: Product,
    pub quantity: i32,
}

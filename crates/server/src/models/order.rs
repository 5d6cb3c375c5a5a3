//! Order domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cartwheel_core::{CustomerId, OrderId};

use super::Product;

/// A placed order. Immutable once created.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub ordered_at: DateTime<Utc>,
}

/// A line-item snapshot within a placed order.
///
/// The quantity is the one captured at order time; later changes to the
/// product's price or name do not rewrite history, but the product row
/// itself is re-read on reconstruction (the original behaves the same way).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub product: Product,
    pub quantity: i32,
}

/// A fully reconstructed order: its id plus every line-item detail.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub ordered_at: DateTime<Utc>,
    pub order_details: Vec<OrderDetail>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use cartwheel_core::{Price, ProductId};

    use super::*;

    #[test]
    fn test_order_view_wire_shape() {
        let view = OrderView {
            id: OrderId::new(7),
            ordered_at: Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
            order_details: vec![OrderDetail {
                product: Product {
                    id: ProductId::new(3),
                    name: "Fried chicken".to_owned(),
                    price: Price::from_minor_units(10_000),
                    image_url: "http://example.com/chicken.jpg".to_owned(),
                    created_at: Utc::now(),
                },
                quantity: 2,
            }],
        };

        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["id"], 7);
        assert!(json["orderedAt"].is_string());

        let detail = &json["orderDetails"][0];
        assert_eq!(detail["quantity"], 2);
        assert_eq!(detail["product"]["id"], 3);
        assert_eq!(detail["product"]["price"], 10_000);
        assert_eq!(detail["product"]["imageUrl"], "http://example.com/chicken.jpg");
        // The snapshot never leaks internal timestamps.
        assert!(detail["product"].get("createdAt").is_none());
    }
}

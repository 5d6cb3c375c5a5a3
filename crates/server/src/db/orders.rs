//! Order repository for database operations.
//!
//! Order placement is the one multi-statement write in the system and runs
//! in a single transaction: the order row, all of its detail rows, and the
//! consumed cart items commit or roll back together.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use cartwheel_core::{CartItemId, CustomerId, OrderId, Price, ProductId};

use super::RepositoryError;
use crate::models::{Order, OrderDetail, Product};

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    customer_id: i32,
    ordered_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            customer_id: CustomerId::new(row.customer_id),
            ordered_at: row.ordered_at,
        }
    }
}

/// Internal row type for the detail-with-product join.
#[derive(Debug, sqlx::FromRow)]
struct OrderDetailRow {
    quantity: i32,
    product_id: i32,
    product_name: String,
    price: i64,
    image_url: String,
    product_created_at: DateTime<Utc>,
}

impl From<OrderDetailRow> for OrderDetail {
    fn from(row: OrderDetailRow) -> Self {
        Self {
            product: Product {
                id: ProductId::new(row.product_id),
                name: row.product_name,
                price: Price::from_minor_units(row.price),
                image_url: row.image_url,
                created_at: row.product_created_at,
            },
            quantity: row.quantity,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Atomically create an order from a set of cart items.
    ///
    /// For each requested line the cart item is consumed with a single
    /// `DELETE .. RETURNING` scoped to the owning customer, which both
    /// resolves the referenced product id and takes the row lock that
    /// serializes two transactions racing for the same cart item: the
    /// loser deletes zero rows and the whole order rolls back. The detail
    /// row records the quantity from the request, not the cart row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if any referenced cart item does
    /// not exist or belongs to another customer; nothing is persisted in
    /// that case. Returns `RepositoryError::Database` for other errors.
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        lines: &[(CartItemId, i32)],
    ) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let (order_id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO orders (customer_id)
            VALUES ($1)
            RETURNING id
            ",
        )
        .bind(customer_id.as_i32())
        .fetch_one(&mut *tx)
        .await?;

        for &(cart_item_id, quantity) in lines {
            let consumed: Option<(i32,)> = sqlx::query_as(
                r"
                DELETE FROM cart_item
                WHERE id = $1 AND customer_id = $2
                RETURNING product_id
                ",
            )
            .bind(cart_item_id.as_i32())
            .bind(customer_id.as_i32())
            .fetch_optional(&mut *tx)
            .await?;

            // Dropping the open transaction rolls everything back.
            let Some((product_id,)) = consumed else {
                return Err(RepositoryError::NotFound);
            };

            sqlx::query(
                r"
                INSERT INTO order_detail (order_id, product_id, quantity)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(order_id)
            .bind(product_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }

    /// Get an order by id, only if it belongs to the given customer.
    ///
    /// A foreign order id and a nonexistent one are indistinguishable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_owned(
        &self,
        order_id: OrderId,
        customer_id: CustomerId,
    ) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, ordered_at
            FROM orders
            WHERE id = $1 AND customer_id = $2
            ",
        )
        .bind(order_id.as_i32())
        .bind(customer_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List a customer's orders in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, ordered_at
            FROM orders
            WHERE customer_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(customer_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Load an order's detail rows, each joined with its product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_details(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderDetail>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderDetailRow>(
            r"
            SELECT od.quantity,
                   p.id AS product_id, p.name AS product_name, p.price,
                   p.image_url, p.created_at AS product_created_at
            FROM order_detail od
            JOIN product p ON p.id = od.product_id
            WHERE od.order_id = $1
            ORDER BY od.id ASC
            ",
        )
        .bind(order_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

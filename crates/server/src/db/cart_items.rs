//! Cart item repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use cartwheel_core::{CartItemId, CustomerId, Price, ProductId};

use super::RepositoryError;
use crate::models::{CartItem, CartLine, Product};

/// Internal row type for cart item queries.
#[derive(Debug, sqlx::FromRow)]
struct CartItemRow {
    id: i32,
    customer_id: i32,
    product_id: i32,
    quantity: i32,
    added_at: DateTime<Utc>,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        Self {
            id: CartItemId::new(row.id),
            customer_id: CustomerId::new(row.customer_id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
            added_at: row.added_at,
        }
    }
}

/// Internal row type for the cart-with-product join.
#[derive(Debug, sqlx::FromRow)]
struct CartLineRow {
    id: i32,
    quantity: i32,
    product_id: i32,
    product_name: String,
    price: i64,
    image_url: String,
    product_created_at: DateTime<Utc>,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        Self {
            id: CartItemId::new(row.id),
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

/// Repository for cart item database operations.
pub struct CartItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartItemRepository<'a> {
    /// Create a new cart item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a product to a customer's cart.
    ///
    /// Each add creates a new row, even if the same product is already in
    /// the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the referenced product does
    /// not exist. Returns `RepositoryError::Database` for other errors.
    pub async fn add(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            r"
            INSERT INTO cart_item (customer_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, customer_id, product_id, quantity, added_at
            ",
        )
        .bind(customer_id.as_i32())
        .bind(product_id.as_i32())
        .bind(quantity)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }

    /// List a customer's cart, each item joined with its product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartLineRow>(
            r"
            SELECT ci.id, ci.quantity,
                   p.id AS product_id, p.name AS product_name, p.price,
                   p.image_url, p.created_at AS product_created_at
            FROM cart_item ci
            JOIN product p ON p.id = ci.product_id
            WHERE ci.customer_id = $1
            ORDER BY ci.id ASC
            ",
        )
        .bind(customer_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Remove an item from a customer's cart.
    ///
    /// Scoped to the owner: an id belonging to another customer's cart is
    /// indistinguishable from a missing one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer owns no such item.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(
        &self,
        customer_id: CustomerId,
        cart_item_id: CartItemId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_item
            WHERE id = $1 AND customer_id = $2
            ",
        )
        .bind(cart_item_id.as_i32())
        .bind(customer_id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

//! Order orchestration service.
//!
//! State-free per call: each operation resolves the acting customer from the
//! token subject, runs against the store, and returns. Placement is the one
//! transactional write; reconstruction joins detail rows with their products.

use sqlx::PgPool;
use thiserror::Error;

use cartwheel_core::{CartItemId, CustomerName, OrderId};

use crate::db::customers::CustomerRepository;
use crate::db::orders::OrderRepository;
use crate::db::RepositoryError;
use crate::models::OrderView;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The token subject no longer names an existing customer.
    #[error("customer not found")]
    CustomerNotFound,

    /// A requested cart item does not exist (or belongs to someone else).
    #[error("cart item not found")]
    CartItemNotFound,

    /// The order id does not belong to the calling customer.
    #[error("no such order for this customer")]
    InvalidOrder,

    /// An order must consume at least one cart item.
    #[error("order must contain at least one line")]
    EmptyOrder,

    /// Line quantities must be positive.
    #[error("line quantity must be positive")]
    InvalidQuantity,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order orchestration service.
pub struct OrderService<'a> {
    customers: CustomerRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
            orders: OrderRepository::new(pool),
        }
    }

    /// Place an order consuming the given cart items.
    ///
    /// Each line's quantity is taken from the request, not re-read from the
    /// cart row. Everything commits or rolls back together: on any failure
    /// no order row, no detail rows, and no cart deletions persist.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::CustomerNotFound` if the name cannot be
    /// resolved, `OrderError::EmptyOrder`/`OrderError::InvalidQuantity` on
    /// bad input, and `OrderError::CartItemNotFound` if any referenced cart
    /// item is missing or foreign.
    pub async fn place_order(
        &self,
        customer_name: &CustomerName,
        lines: &[(CartItemId, i32)],
    ) -> Result<OrderId, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if lines.iter().any(|&(_, quantity)| quantity <= 0) {
            return Err(OrderError::InvalidQuantity);
        }

        let customer_id = self
            .customers
            .find_id_by_name(customer_name)
            .await?
            .ok_or(OrderError::CustomerNotFound)?;

        self.orders
            .create_order(customer_id, lines)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::CartItemNotFound,
                other => OrderError::Repository(other),
            })
    }

    /// Reconstruct one of the customer's orders.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidOrder` when the order id is foreign or
    /// nonexistent; the two cases are indistinguishable to the caller.
    pub async fn get_order(
        &self,
        customer_name: &CustomerName,
        order_id: OrderId,
    ) -> Result<OrderView, OrderError> {
        let customer_id = self
            .customers
            .find_id_by_name(customer_name)
            .await?
            .ok_or(OrderError::CustomerNotFound)?;

        let order = self
            .orders
            .find_owned(order_id, customer_id)
            .await?
            .ok_or(OrderError::InvalidOrder)?;

        let order_details = self.orders.list_details(order.id).await?;

        Ok(OrderView {
            id: order.id,
            ordered_at: order.ordered_at,
            order_details,
        })
    }

    /// Reconstruct every order the customer has placed, in id order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::CustomerNotFound` if the name cannot be resolved.
    pub async fn list_orders(
        &self,
        customer_name: &CustomerName,
    ) -> Result<Vec<OrderView>, OrderError> {
        let customer_id = self
            .customers
            .find_id_by_name(customer_name)
            .await?
            .ok_or(OrderError::CustomerNotFound)?;

        let orders = self.orders.list_by_customer(customer_id).await?;

        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            let order_details = self.orders.list_details(order.id).await?;
            views.push(OrderView {
                id: order.id,
                ordered_at: order.ordered_at,
                order_details,
            });
        }

        Ok(views)
    }
}

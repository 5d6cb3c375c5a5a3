//! Customer repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use cartwheel_core::{CustomerId, CustomerName};

use super::RepositoryError;
use crate::models::Customer;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for customer queries.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let name = CustomerName::parse(&row.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid customer name in database: {e}"))
        })?;

        Ok(Self {
            id: CustomerId::new(row.id),
            name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Row type for the password-verification lookup.
#[derive(Debug, sqlx::FromRow)]
struct CustomerWithHashRow {
    id: i32,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new customer with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &CustomerName,
        password_hash: &str,
    ) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            INSERT INTO customer (name, password_hash)
            VALUES ($1, $2)
            RETURNING id, name, created_at, updated_at
            ",
        )
        .bind(name.as_str())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("name already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// Get a customer by their unique name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored name is invalid.
    pub async fn find_by_name(
        &self,
        name: &CustomerName,
    ) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, name, created_at, updated_at
            FROM customer
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Resolve a customer name to its id.
    ///
    /// Every authorized operation re-resolves the customer record from the
    /// token subject before it can validate ownership.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_id_by_name(
        &self,
        name: &CustomerName,
    ) -> Result<Option<CustomerId>, RepositoryError> {
        let id: Option<(i32,)> = sqlx::query_as(
            r"
            SELECT id
            FROM customer
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(id.map(|(id,)| CustomerId::new(id)))
    }

    /// Get a customer together with their password hash, by name.
    ///
    /// Returns `None` if no such customer exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored name is invalid.
    pub async fn get_password_hash(
        &self,
        name: &CustomerName,
    ) -> Result<Option<(Customer, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerWithHashRow>(
            r"
            SELECT id, name, password_hash, created_at, updated_at
            FROM customer
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let name = CustomerName::parse(&r.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid customer name in database: {e}"))
        })?;

        let customer = Customer {
            id: CustomerId::new(r.id),
            name,
            created_at: r.created_at,
            updated_at: r.updated_at,
        };

        Ok(Some((customer, r.password_hash)))
    }

    /// Replace a customer's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has that name.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_password(
        &self,
        name: &CustomerName,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE customer
            SET password_hash = $1, updated_at = now()
            WHERE name = $2
            ",
        )
        .bind(password_hash)
        .bind(name.as_str())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a customer by name.
    ///
    /// Cart items and orders cascade at the schema level.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has that name.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete_by_name(&self, name: &CustomerName) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM customer
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

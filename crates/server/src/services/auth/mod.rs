//! Customer account and authentication service.
//!
//! Registration, login, and the profile operations behind the guarded
//! `/customers/me` endpoints. Passwords are stored as salted Argon2 hashes;
//! login fetches the stored hash by name and verifies, it never compares
//! ciphertext for equality.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use cartwheel_core::CustomerName;

use crate::db::RepositoryError;
use crate::db::customers::CustomerRepository;
use crate::models::Customer;
use crate::services::token::TokenCodec;

/// Customer account service.
pub struct AuthService<'a> {
    customers: CustomerRepository<'a>,
    tokens: &'a TokenCodec,
}

impl<'a> AuthService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, tokens: &'a TokenCodec) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
            tokens,
        }
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidName`/`AuthError::EmptyPassword` on bad
    /// input and `AuthError::DuplicateName` if the name is already taken.
    pub async fn register(&self, name: &str, password: &str) -> Result<Customer, AuthError> {
        let name = CustomerName::parse(name)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let customer = self
            .customers
            .create(&name, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::DuplicateName,
                other => AuthError::Repository(other),
            })?;

        Ok(customer)
    }

    /// Authenticate a customer and issue an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the name is unknown
    /// or the password is wrong; the two cases are not distinguished.
    pub async fn login(&self, name: &str, password: &str) -> Result<String, AuthError> {
        let name = CustomerName::parse(name).map_err(|_| AuthError::InvalidCredentials)?;

        let (customer, password_hash) = self
            .customers
            .get_password_hash(&name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        let token = self.tokens.issue(customer.name.as_str())?;
        Ok(token)
    }

    /// Look up a customer by name.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CustomerNotFound` if no such customer exists.
    pub async fn find(&self, name: &CustomerName) -> Result<Customer, AuthError> {
        self.customers
            .find_by_name(name)
            .await?
            .ok_or(AuthError::CustomerNotFound)
    }

    /// Replace a customer's password.
    ///
    /// No re-authentication happens here; the caller is the guarded handler
    /// and has already verified that the token belongs to `name`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CustomerNotFound` if no such customer exists.
    pub async fn update_password(
        &self,
        name: &CustomerName,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password(new_password)?;
        let password_hash = hash_password(new_password)?;

        self.customers
            .update_password(name, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::CustomerNotFound,
                other => AuthError::Repository(other),
            })
    }

    /// Close a customer's account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CustomerNotFound` if no such customer exists.
    pub async fn delete(&self, name: &CustomerName) -> Result<(), AuthError> {
        self.customers
            .delete_by_name(name)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::CustomerNotFound,
                other => AuthError::Repository(other),
            })
    }
}

/// Reject empty passwords before hashing.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    Ok(())
}

/// Hash a password with Argon2 and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::PasswordHash)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash.
fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("hunter2").expect("hash");
        assert!(verify_password("hunter2", &hash).is_ok());
    }

    #[test]
    fn test_verify_wrong_password() {
        let hash = hash_password("hunter2").expect("hash");
        assert!(matches!(
            verify_password("hunter3", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("hunter2").expect("hash");
        let b = hash_password("hunter2").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_password_empty() {
        assert!(matches!(
            validate_password(""),
            Err(AuthError::EmptyPassword)
        ));
        assert!(validate_password("1234").is_ok());
    }
}

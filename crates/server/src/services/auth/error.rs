//! Authentication error types.

use thiserror::Error;

use cartwheel_core::NameError;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors that can occur during customer account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with a name that is already taken.
    #[error("name already taken")]
    DuplicateName,

    /// Invalid credentials (wrong password or unknown name).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No customer record for the given name.
    ///
    /// Reachable with a valid token whose subject was deleted after issue.
    #[error("customer not found")]
    CustomerNotFound,

    /// Invalid customer name in a request.
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    /// Password field missing or empty.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// Token issue/verify failure.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

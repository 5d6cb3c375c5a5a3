//! Business services composing the repositories.

pub mod auth;
pub mod orders;
pub mod token;

pub use auth::{AuthError, AuthService};
pub use orders::{OrderError, OrderService};
pub use token::{TokenCodec, TokenError};

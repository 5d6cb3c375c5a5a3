//! Request extractors: identity resolution and JSON body handling.

pub mod auth;
pub mod json;

pub use auth::{Principal, bearer_token};
pub use json::AppJson;

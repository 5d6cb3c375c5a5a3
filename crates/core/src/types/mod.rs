//! Core types for Cartwheel.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod name;
pub mod price;

pub use id::*;
pub use name::{CustomerName, NameError};
pub use price::Price;

//! Domain models for customers, catalog, carts, and orders.
//!
//! Request/response DTO types live next to their route handlers; the types
//! here are what the repositories and services trade in.

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;

pub use cart::{CartItem, CartLine};
pub use customer::Customer;
pub use order::{Order, OrderDetail, OrderView};
pub use product::Product;

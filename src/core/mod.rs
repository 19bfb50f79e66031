//! Core business logic for the storefront, one module per aggregate.
//!
//! All functions are async, take a connection (or transaction) explicitly,
//! and return the crate's `Result` type. Presentation concerns live entirely
//! outside this crate.

/// Category operations: creation and catalog lookups
pub mod category;
/// Customer operations: creation and order history lookups
pub mod customer;
/// Order operations: construction, estimation, and the completion transition
pub mod order;
/// Product operations: creation, lookups, and restocking
pub mod product;

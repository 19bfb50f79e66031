//! Unified error types for the storefront core.
//!
//! Every domain failure the spec distinguishes gets its own variant so callers
//! (the web layer, the seeder) can map each one to a distinct response instead
//! of collapsing everything into a generic 500.

use rust_decimal::Decimal;
use thiserror::Error;

/// All errors produced by the storefront core.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (bad catalog file, missing setting)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what is misconfigured
        message: String,
    },

    /// Entity construction rejected: missing or out-of-domain field
    #[error("Validation error: {message}")]
    Validation {
        /// Which field was rejected and why
        message: String,
    },

    /// An order line quantity below 1 was supplied
    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i32,
    },

    /// A negative price was supplied
    #[error("Invalid price: {price} (must be non-negative)")]
    InvalidPrice {
        /// The rejected price
        price: Decimal,
    },

    /// No category row with the given id
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The missing category id
        id: i64,
    },

    /// No customer row with the given id
    #[error("Customer not found: {id}")]
    CustomerNotFound {
        /// The missing customer id
        id: i64,
    },

    /// No product row with the given id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The missing product id
        id: i64,
    },

    /// No order row with the given id
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// The missing order id
        id: i64,
    },

    /// Attempted to complete an order that is already finalized.
    /// No inventory is deducted when this is returned.
    #[error("Order {order_id} is already completed")]
    AlreadyCompleted {
        /// The finalized order's id
        order_id: i64,
    },

    /// Stock check failed during order completion. Carries enough detail
    /// for the caller to render an actionable message. Nothing is mutated
    /// when this is returned.
    #[error(
        "Insufficient inventory for product {product_id} ({product_name}): requested {requested}, available {available}"
    )]
    InsufficientInventory {
        /// Id of the product that failed the stock check
        product_id: i64,
        /// Display name of the product
        product_name: String,
        /// Quantity the order line asked for
        requested: i32,
        /// Quantity actually on hand
        available: i32,
    },

    /// Opaque persistence failure, propagated as-is
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (catalog file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

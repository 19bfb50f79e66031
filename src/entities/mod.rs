//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod customer;
pub mod order;
pub mod order_line;
pub mod product;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_line::{Column as OrderLineColumn, Entity as OrderLine, Model as OrderLineModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};

/// Closed registry of the entity kinds this schema defines.
///
/// Anything that needs to dispatch over "all tables" (schema creation, the
/// demo seeder) matches on this enum instead of looking entities up by
/// string name, so adding a table is a compile-time-checked change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// `categories` table
    Category,
    /// `customers` table
    Customer,
    /// `products` table
    Product,
    /// `orders` table
    Order,
    /// `order_lines` table
    OrderLine,
}

impl EntityKind {
    /// Every kind, in dependency order: referenced tables before the tables
    /// that carry foreign keys into them.
    pub const ALL: [Self; 5] = [
        Self::Category,
        Self::Customer,
        Self::Product,
        Self::Order,
        Self::OrderLine,
    ];

    /// The SQL table name for this kind.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Customer => "customers",
            Self::Product => "products",
            Self::Order => "orders",
            Self::OrderLine => "order_lines",
        }
    }
}

//! Order entity - Represents a customer's order through its lifecycle.
//!
//! An order is created PENDING (`completed` and `amount` both null) and
//! transitions exactly once, via [`crate::core::order::complete`], to
//! COMPLETED (`completed` and `amount` both set). There is no
//! partially-completed state and no way back.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the customer who placed the order
    pub customer_id: i64,
    /// When the order was created; immutable after construction
    pub created: DateTimeUtc,
    /// When the order was completed; None while PENDING
    pub completed: Option<DateTimeUtc>,
    /// Final charged amount, fixed-point with 2 decimal places; None while PENDING
    #[sea_orm(column_type = "Decimal(Some((6, 2)))", nullable)]
    pub amount: Option<Decimal>,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// One order has many order lines
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLines,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether this order is still PENDING (never completed).
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.completed.is_none()
    }
}

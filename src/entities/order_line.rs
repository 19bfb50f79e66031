//! Order line entity - Associates one product with one order at a quantity.
//!
//! The primary key is the composite `(product_id, order_id)`, so a product
//! appears at most once per order. `line_no` records the position of the
//! line within its order; completion walks lines in this order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_lines")]
pub struct Model {
    /// ID of the product this line refers to
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    /// ID of the order this line belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i64,
    /// How many units of the product, always at least 1
    pub quantity: i32,
    /// Zero-based insertion position of this line within its order
    pub line_no: i32,
}

/// Defines relationships between OrderLine and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order line refers to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// Each order line belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

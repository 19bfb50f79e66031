//! Database configuration module for the storefront.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. Table creation uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL statements from the entity
//! models, so the database schema always matches the Rust struct definitions without
//! requiring manual SQL. Dispatch over the set of tables goes through the closed
//! [`EntityKind`] registry rather than any name-based lookup.

use crate::entities::{Category, Customer, EntityKind, Order, OrderLine, Product};
use crate::errors::Result;
use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/storefront.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Builds the CREATE TABLE statement for one entity kind.
fn create_table_statement(schema: &Schema, kind: EntityKind) -> TableCreateStatement {
    match kind {
        EntityKind::Category => schema.create_table_from_entity(Category),
        EntityKind::Customer => schema.create_table_from_entity(Customer),
        EntityKind::Product => schema.create_table_from_entity(Product),
        EntityKind::Order => schema.create_table_from_entity(Order),
        EntityKind::OrderLine => schema.create_table_from_entity(OrderLine),
    }
}

/// Creates all schema tables from the entity definitions.
///
/// Tables are created in [`EntityKind::ALL`] order, so referenced tables
/// exist before the tables carrying foreign keys into them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    for kind in EntityKind::ALL {
        let statement = create_table_statement(&schema, kind);
        db.execute(builder.build(&statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        category::Model as CategoryModel, customer::Model as CustomerModel,
        order::Model as OrderModel, order_line::Model as OrderLineModel,
        product::Model as ProductModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<CategoryModel> = Category::find().limit(1).all(&db).await?;
        let _: Vec<CustomerModel> = Customer::find().limit(1).all(&db).await?;
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<OrderModel> = Order::find().limit(1).all(&db).await?;
        let _: Vec<OrderLineModel> = OrderLine::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[test]
    fn test_entity_kind_table_names() {
        assert_eq!(EntityKind::Category.table_name(), "categories");
        assert_eq!(EntityKind::OrderLine.table_name(), "order_lines");
        assert_eq!(EntityKind::ALL.len(), 5);
    }
}

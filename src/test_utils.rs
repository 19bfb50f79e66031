//! Shared test utilities for the storefront core.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{category, customer, order, product},
    entities,
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test category with the given name.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string()).await
}

/// Creates a test customer with a default phone number.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::customer::Model> {
    customer::create_customer(db, name.to_string(), "555-0100".to_string()).await
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * price: 10.00
/// * inventory: 25
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category_id: i64,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), Decimal::new(1000, 2), 25, category_id).await
}

/// Creates a test product with custom price and inventory.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: Decimal,
    inventory: i32,
    category_id: i64,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), price, inventory, category_id).await
}

/// Creates a PENDING order with no lines for the given customer.
pub async fn create_empty_test_order(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<entities::order::Model> {
    order::create_order(db, customer_id, &[]).await
}

/// Fetches a product by id, failing the test if it is missing.
pub async fn get_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<entities::product::Model> {
    product::get_product_by_id(db, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })
}

/// The two-product setup used by the order completion tests:
/// Product A (inventory=10, price=2.00) and Product B (inventory=3, price=5.00),
/// both under one category, plus a customer to place orders.
pub struct TwoProductScenario {
    /// Customer placing the orders
    pub customer: entities::customer::Model,
    /// Product A: inventory 10, price 2.00
    pub product_a: entities::product::Model,
    /// Product B: inventory 3, price 5.00
    pub product_b: entities::product::Model,
}

/// Sets up a fresh database with the [`TwoProductScenario`] fixture.
pub async fn setup_two_product_scenario() -> Result<(DatabaseConnection, TwoProductScenario)> {
    let db = setup_test_db().await?;
    let customer = create_test_customer(&db, "Ada").await?;
    let category = create_test_category(&db, "General").await?;
    let product_a =
        create_custom_product(&db, "Product A", Decimal::new(200, 2), 10, category.id).await?;
    let product_b =
        create_custom_product(&db, "Product B", Decimal::new(500, 2), 3, category.id).await?;
    Ok((
        db,
        TwoProductScenario {
            customer,
            product_a,
            product_b,
        },
    ))
}

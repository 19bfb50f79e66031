//! Customer business logic - Handles all customer-related operations.

use crate::{
    entities::{Customer, Order, customer, order},
    errors::{Error, Result},
    repo,
};
use sea_orm::{ColumnTrait, ConnectionTrait, QueryOrder, Set, prelude::*};

/// Retrieves all customers, ordered alphabetically by name.
pub async fn get_all_customers<C: ConnectionTrait>(db: &C) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a customer by its unique ID, returning `None` if absent.
pub async fn get_customer_by_id<C: ConnectionTrait>(
    db: &C,
    customer_id: i64,
) -> Result<Option<customer::Model>> {
    repo::get::<Customer, _>(db, customer_id).await
}

/// Retrieves all orders placed by a customer, oldest first.
///
/// Fails with [`Error::CustomerNotFound`] if the customer does not exist.
pub async fn get_orders_for_customer<C: ConnectionTrait>(
    db: &C,
    customer_id: i64,
) -> Result<Vec<order::Model>> {
    repo::get::<Customer, _>(db, customer_id)
        .await?
        .ok_or(Error::CustomerNotFound { id: customer_id })?;

    Order::find()
        .filter(order::Column::CustomerId.eq(customer_id))
        .order_by_asc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new customer, validating that the name is non-empty.
pub async fn create_customer<C: ConnectionTrait>(
    db: &C,
    name: String,
    phone: String,
) -> Result<customer::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Customer name cannot be empty".to_string(),
        });
    }

    let customer = customer::ActiveModel {
        name: Set(name.trim().to_string()),
        phone: Set(phone),
        ..Default::default()
    };

    repo::save(db, customer).await
}

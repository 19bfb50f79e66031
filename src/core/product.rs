//! Product business logic - Handles all product-related operations.
//!
//! Products carry the only mutable shared state in the core: the `inventory`
//! count. Both mutation paths (restocking here, deduction in
//! [`crate::core::order::complete`]) go through guarded single-statement
//! updates so inventory can never be observed negative.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
    repo,
};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, ConnectionTrait, QueryOrder, Set, prelude::*};

/// Retrieves all products, ordered alphabetically by name.
pub async fn get_all_products<C: ConnectionTrait>(db: &C) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by its unique ID, returning `None` if absent.
pub async fn get_product_by_id<C: ConnectionTrait>(
    db: &C,
    product_id: i64,
) -> Result<Option<product::Model>> {
    repo::get::<Product, _>(db, product_id).await
}

/// Finds a product by its display name, returning `None` if absent.
pub async fn get_product_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<product::Model>> {
    repo::find_one::<Product, _>(db, product::Column::Name.eq(name)).await
}

/// Creates a new product with the specified parameters, performing input validation.
///
/// The name must be non-empty, the price non-negative, the initial inventory
/// non-negative, and the referenced category must exist.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is negative
/// - The inventory is negative
/// - The category does not exist
/// - The database insert operation fails
pub async fn create_product<C: ConnectionTrait>(
    db: &C,
    name: String,
    price: Decimal,
    inventory: i32,
    category_id: i64,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if price < Decimal::ZERO {
        return Err(Error::InvalidPrice { price });
    }

    if inventory < 0 {
        return Err(Error::Validation {
            message: format!("Product inventory cannot be negative: {inventory}"),
        });
    }

    crate::core::category::get_category_by_id(db, category_id)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })?;

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        price: Set(price.round_dp(2)),
        inventory: Set(inventory),
        category_id: Set(category_id),
        ..Default::default()
    };

    repo::save(db, product).await
}

/// Adds stock to a product by atomically incrementing its inventory.
///
/// The increment happens in a single SQL UPDATE statement
/// (`inventory = inventory + quantity`), so concurrent restocks and
/// completions cannot lose updates.
///
/// # Errors
/// Returns an error if the quantity is below 1 or the product does not exist.
pub async fn restock<C: ConnectionTrait>(
    db: &C,
    product_id: i64,
    quantity: i32,
) -> Result<product::Model> {
    use sea_orm::sea_query::Expr;

    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let updated = Product::update_many()
        .col_expr(
            product::Column::Inventory,
            Expr::col(product::Column::Inventory).add(quantity),
        )
        .filter(product::Column::Id.eq(product_id))
        .exec(db)
        .await?;

    if updated.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }

    repo::get::<Product, _>(db, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })
}

//! Order business logic - Construction, estimation, and completion.
//!
//! An order moves through exactly one transition: PENDING -> COMPLETED, via
//! [`complete`]. Completion is all-or-nothing: every line's stock is checked
//! before any stock is deducted, and the whole operation runs inside a single
//! database transaction, so a failing line leaves every inventory and the
//! order itself untouched.

use crate::{
    entities::{Order, OrderLine, Product, order, order_line, product},
    errors::{Error, Result},
    repo,
};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, QueryOrder, Set, TransactionTrait, prelude::*,
};
use tracing::{debug, info};

/// Finds an order by its unique ID, returning `None` if absent.
pub async fn get_order_by_id<C: ConnectionTrait>(
    db: &C,
    order_id: i64,
) -> Result<Option<order::Model>> {
    repo::get::<Order, _>(db, order_id).await
}

/// Retrieves the lines of an order in their insertion order.
pub async fn get_lines_for_order<C: ConnectionTrait>(
    db: &C,
    order_id: i64,
) -> Result<Vec<order_line::Model>> {
    OrderLine::find()
        .filter(order_line::Column::OrderId.eq(order_id))
        .order_by_asc(order_line::Column::LineNo)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new PENDING order for a customer with the given
/// `(product_id, quantity)` lines, inserted in the order given.
///
/// The order row and all of its lines are inserted in one transaction, so a
/// rejected line leaves no half-constructed order behind.
///
/// # Errors
/// Returns an error if:
/// - The customer does not exist
/// - Any quantity is below 1
/// - Any referenced product does not exist
/// - The same product appears on more than one line
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i64,
    lines: &[(i64, i32)],
) -> Result<order::Model> {
    let txn = db.begin().await?;

    crate::core::customer::get_customer_by_id(&txn, customer_id)
        .await?
        .ok_or(Error::CustomerNotFound { id: customer_id })?;

    for (index, &(product_id, quantity)) in lines.iter().enumerate() {
        if quantity < 1 {
            return Err(Error::InvalidQuantity { quantity });
        }
        crate::core::product::get_product_by_id(&txn, product_id)
            .await?
            .ok_or(Error::ProductNotFound { id: product_id })?;
        if lines[..index].iter().any(|&(earlier, _)| earlier == product_id) {
            return Err(Error::Validation {
                message: format!("Product {product_id} appears on more than one order line"),
            });
        }
    }

    let order_model = order::ActiveModel {
        customer_id: Set(customer_id),
        created: Set(chrono::Utc::now()),
        completed: Set(None),
        amount: Set(None),
        ..Default::default()
    };
    let created = repo::save(&txn, order_model).await?;

    let line_models = lines.iter().enumerate().map(|(index, &(product_id, quantity))| {
        order_line::ActiveModel {
            product_id: Set(product_id),
            order_id: Set(created.id),
            quantity: Set(quantity),
            line_no: Set(i32::try_from(index).unwrap_or(i32::MAX)),
        }
    });
    repo::save_all(&txn, line_models).await?;

    txn.commit().await?;

    debug!(order_id = created.id, customer_id, lines = lines.len(), "created order");
    Ok(created)
}

/// Computes the total an order would charge, without any side effects.
///
/// Returns `sum(line.quantity * product.price)` over the order's lines, so an
/// order with no lines estimates to zero. Callable on PENDING and COMPLETED
/// orders alike; never mutates inventory or the order.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] if the order does not exist.
pub async fn estimate<C: ConnectionTrait>(db: &C, order_id: i64) -> Result<Decimal> {
    get_order_by_id(db, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    let mut total = Decimal::ZERO;
    for line in get_lines_for_order(db, order_id).await? {
        let product = crate::core::product::get_product_by_id(db, line.product_id)
            .await?
            .ok_or(Error::ProductNotFound { id: line.product_id })?;
        total += Decimal::from(line.quantity) * product.price;
    }
    Ok(total)
}

/// Completes a PENDING order: deducts stock for every line, stamps the
/// completion time and final amount, and returns that amount.
///
/// The whole transition is one database transaction in three phases:
///
/// 1. Reject orders that are already COMPLETED (re-completion never deducts
///    stock a second time).
/// 2. Check every line against current stock, in line order, before touching
///    anything. The first short line aborts with
///    [`Error::InsufficientInventory`] and no mutation at all.
/// 3. Deduct each line with a guarded UPDATE
///    (`SET inventory = inventory - qty WHERE id = ? AND inventory >= qty`).
///    A guarded update that matches no row means a concurrent completion won
///    the race for that stock after our check; the transaction is abandoned,
///    rolling back any earlier deductions, and the same error is returned.
///
/// The amount is computed from the pre-deduction line quantities and prices,
/// which deduction does not change.
pub async fn complete(db: &DatabaseConnection, order_id: i64) -> Result<Decimal> {
    use sea_orm::sea_query::Expr;

    let txn = db.begin().await?;

    let order = get_order_by_id(&txn, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if !order.is_pending() {
        return Err(Error::AlreadyCompleted { order_id });
    }

    let lines = get_lines_for_order(&txn, order_id).await?;

    // Phase one: validate every line against current stock and price the
    // order, before any mutation.
    let mut amount = Decimal::ZERO;
    for line in &lines {
        let product = crate::core::product::get_product_by_id(&txn, line.product_id)
            .await?
            .ok_or(Error::ProductNotFound { id: line.product_id })?;

        if product.inventory < line.quantity {
            return Err(Error::InsufficientInventory {
                product_id: product.id,
                product_name: product.name,
                requested: line.quantity,
                available: product.inventory,
            });
        }

        amount += Decimal::from(line.quantity) * product.price;
    }

    // Phase two: deduct, guarded so inventory can never go negative even if
    // another completion touched the same product since our check.
    for line in &lines {
        let updated = Product::update_many()
            .col_expr(
                product::Column::Inventory,
                Expr::col(product::Column::Inventory).sub(line.quantity),
            )
            .filter(product::Column::Id.eq(line.product_id))
            .filter(product::Column::Inventory.gte(line.quantity))
            .exec(&txn)
            .await?;

        if updated.rows_affected == 0 {
            let product = crate::core::product::get_product_by_id(&txn, line.product_id)
                .await?
                .ok_or(Error::ProductNotFound { id: line.product_id })?;
            return Err(Error::InsufficientInventory {
                product_id: product.id,
                product_name: product.name,
                requested: line.quantity,
                available: product.inventory,
            });
        }
    }

    let mut active: order::ActiveModel = order.into();
    active.amount = Set(Some(amount));
    active.completed = Set(Some(chrono::Utc::now()));
    active.update(&txn).await?;

    txn.commit().await?;

    info!(order_id, %amount, "completed order");
    Ok(amount)
}

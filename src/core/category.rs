//! Category business logic - Handles all category-related operations.
//!
//! Categories group products in the catalog. The product side of the
//! relationship is resolved by explicit query rather than a live
//! back-pointer, so there is no embedded object graph to keep consistent.

use crate::{
    entities::{Category, Product, category, product},
    errors::{Error, Result},
    repo,
};
use sea_orm::{ColumnTrait, ConnectionTrait, QueryOrder, Set, prelude::*};

/// Retrieves all categories, ordered alphabetically by name.
pub async fn get_all_categories<C: ConnectionTrait>(db: &C) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its unique ID, returning `None` if absent.
pub async fn get_category_by_id<C: ConnectionTrait>(
    db: &C,
    category_id: i64,
) -> Result<Option<category::Model>> {
    repo::get::<Category, _>(db, category_id).await
}

/// Finds a category by its display name, returning `None` if absent.
pub async fn get_category_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<category::Model>> {
    repo::find_one::<Category, _>(db, category::Column::Name.eq(name)).await
}

/// Retrieves all products belonging to a category, in insertion order.
///
/// Fails with [`Error::CategoryNotFound`] if the category does not exist,
/// so an empty result always means "category exists but has no products".
pub async fn get_products_in_category<C: ConnectionTrait>(
    db: &C,
    category_id: i64,
) -> Result<Vec<product::Model>> {
    repo::get::<Category, _>(db, category_id)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })?;

    repo::list::<Product, _>(db, Some(product::Column::CategoryId.eq(category_id))).await
}

/// Creates a new category, validating that the name is non-empty.
pub async fn create_category<C: ConnectionTrait>(db: &C, name: String) -> Result<category::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let category = category::ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    };

    repo::save(db, category).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_category_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_category(&db, String::new()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        let result = create_category(&db, "   ".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_trims_name() -> Result<()> {
        let db = setup_test_db().await?;

        let category = create_category(&db, "  Beverages  ".to_string()).await?;
        assert_eq!(category.name, "Beverages");
        assert!(category.id > 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_category_by_name_and_id() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_category(&db, "Hardware").await?;

        let by_name = get_category_by_name(&db, "Hardware").await?;
        assert_eq!(by_name.unwrap().id, created.id);

        let by_id = get_category_by_id(&db, created.id).await?;
        assert_eq!(by_id.unwrap().name, "Hardware");

        let missing = get_category_by_name(&db, "Nonexistent").await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_categories_ordered() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_category(&db, "Hardware").await?;
        create_test_category(&db, "Beverages").await?;

        let all = get_all_categories(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Beverages");
        assert_eq!(all[1].name, "Hardware");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_products_in_category() -> Result<()> {
        let db = setup_test_db().await?;
        let beverages = create_test_category(&db, "Beverages").await?;
        let hardware = create_test_category(&db, "Hardware").await?;
        create_test_product(&db, "Coffee", beverages.id).await?;
        create_test_product(&db, "Tea", beverages.id).await?;

        let in_beverages = get_products_in_category(&db, beverages.id).await?;
        assert_eq!(in_beverages.len(), 2);
        assert_eq!(in_beverages[0].name, "Coffee");

        // A category may have zero products
        let in_hardware = get_products_in_category(&db, hardware.id).await?;
        assert!(in_hardware.is_empty());

        let missing = get_products_in_category(&db, 999).await;
        assert!(matches!(missing.unwrap_err(), Error::CategoryNotFound { id: 999 }));

        Ok(())
    }
}

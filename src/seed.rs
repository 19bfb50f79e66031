//! Demo-data seeding from the catalog configuration.
//!
//! Populates categories and products from store.toml, going through the
//! `core` construction contract so seeded rows face the same validation as
//! administrative input. Seeding is idempotent by name: categories and
//! products that already exist are left alone.

use crate::{
    config::catalog::Catalog,
    core::{category, product},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

/// Seeds the catalog from the given configuration.
///
/// Returns the number of products created.
pub async fn seed_catalog(db: &DatabaseConnection, catalog: &Catalog) -> Result<usize> {
    info!(
        "Seeding catalog: {} categories configured",
        catalog.categories.len()
    );

    let mut created = 0;
    for category_config in &catalog.categories {
        let category_row = match category::get_category_by_name(db, &category_config.name).await? {
            Some(existing) => existing,
            None => category::create_category(db, category_config.name.clone()).await?,
        };

        for product_config in &category_config.products {
            if product::get_product_by_name(db, &product_config.name)
                .await?
                .is_some()
            {
                debug!(name = %product_config.name, "product already seeded, skipping");
                continue;
            }

            product::create_product(
                db,
                product_config.name.clone(),
                product_config.price,
                product_config.inventory,
                category_row.id,
            )
            .await?;
            created += 1;
        }
    }

    info!("Catalog seeding done: {created} products created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::catalog::{CategoryConfig, ProductConfig};
    use crate::core::{category, product};
    use crate::test_utils::*;
    use rust_decimal::Decimal;

    fn demo_catalog() -> Catalog {
        Catalog {
            categories: vec![
                CategoryConfig {
                    name: "Beverages".to_string(),
                    products: vec![
                        ProductConfig {
                            name: "Coffee".to_string(),
                            price: Decimal::new(250, 2),
                            inventory: 40,
                        },
                        ProductConfig {
                            name: "Tea".to_string(),
                            price: Decimal::new(175, 2),
                            inventory: 0,
                        },
                    ],
                },
                CategoryConfig {
                    name: "Hardware".to_string(),
                    products: vec![],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_seed_catalog() -> Result<()> {
        let db = setup_test_db().await?;

        let created = seed_catalog(&db, &demo_catalog()).await?;
        assert_eq!(created, 2);

        let categories = category::get_all_categories(&db).await?;
        assert_eq!(categories.len(), 2);

        let coffee = product::get_product_by_name(&db, "Coffee").await?.unwrap();
        assert_eq!(coffee.price, Decimal::new(250, 2));
        assert_eq!(coffee.inventory, 40);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let catalog = demo_catalog();

        seed_catalog(&db, &catalog).await?;
        let created_again = seed_catalog(&db, &catalog).await?;
        assert_eq!(created_again, 0);

        assert_eq!(product::get_all_products(&db).await?.len(), 2);
        assert_eq!(category::get_all_categories(&db).await?.len(), 2);

        Ok(())
    }
}

//! Catalog seed configuration loading from store.toml
//!
//! This module loads the initial catalog (categories with their products)
//! from a TOML configuration file. The catalog defined in store.toml is
//! used to seed the database on first run or when the catalog is empty.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire store.toml file
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// List of category configurations to seed, each with its products
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single category and the products it contains
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Name of the category
    pub name: String,
    /// Products to create under this category
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

/// Configuration for a single product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Name of the product
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Initial count on hand; products default to out of stock
    #[serde(default)]
    pub inventory: i32,
}

/// Loads catalog configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse store.toml: {e}"),
    })
}

/// Loads catalog configuration from the default location (./store.toml)
pub fn load_default_catalog() -> Result<Catalog> {
    load_catalog("store.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[categories]]
            name = "Beverages"

            [[categories.products]]
            name = "Coffee"
            price = 2.50
            inventory = 40

            [[categories.products]]
            name = "Tea"
            price = 1.75

            [[categories]]
            name = "Hardware"
        "#;

        let catalog: Catalog = toml::from_str(toml_str).unwrap();
        assert_eq!(catalog.categories.len(), 2);

        let beverages = &catalog.categories[0];
        assert_eq!(beverages.name, "Beverages");
        assert_eq!(beverages.products.len(), 2);
        assert_eq!(beverages.products[0].price, Decimal::new(250, 2));
        assert_eq!(beverages.products[0].inventory, 40);
        // Inventory defaults to 0 when omitted
        assert_eq!(beverages.products[1].inventory, 0);

        assert!(catalog.categories[1].products.is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("/nonexistent/store.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}

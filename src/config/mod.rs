/// Database configuration and connection management
pub mod database;

/// Catalog seed configuration loading from store.toml
pub mod catalog;

//! Demo binary: initializes the store database, seeds the catalog from
//! store.toml, and prints the resulting product list.

use dotenvy::dotenv;
use storefront::errors::Result;
use storefront::{config, core, seed};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Schema tables created."))
        .inspect_err(|e| error!("Failed to create schema tables: {}", e))?;

    let catalog = config::catalog::load_default_catalog()
        .inspect_err(|e| error!("Failed to load catalog configuration: {}", e))?;

    seed::seed_catalog(&db, &catalog)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    for product in core::product::get_all_products(&db).await? {
        println!(
            "{} - {} (inventory: {})",
            product.name, product.price, product.inventory
        );
    }

    Ok(())
}

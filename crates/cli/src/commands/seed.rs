//! Catalog seeding command.
//!
//! Inserts a small demo catalog so a fresh environment has something to put
//! in a cart.
//!
//! # Usage
//!
//! ```bash
//! cartwheel-cli seed
//! ```

use tracing::info;

use cartwheel_core::Price;
use cartwheel_server::db::{self, ProductRepository};

use super::{CommandError, database_url};

/// Demo products inserted by `cartwheel-cli seed`.
const DEMO_PRODUCTS: &[(&str, i64, &str)] = &[
    ("Fried chicken", 10_000, "http://example.com/chicken.jpg"),
    ("Beer", 20_000, "http://example.com/beer.jpg"),
    ("Tteokbokki", 6_500, "http://example.com/tteokbokki.jpg"),
    ("Cola", 1_800, "http://example.com/cola.jpg"),
];

/// Seed the catalog with demo products.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let products = ProductRepository::new(&pool);
    for &(name, price, image_url) in DEMO_PRODUCTS {
        let product = products
            .create(name, Price::from_minor_units(price), image_url)
            .await?;
        info!(id = %product.id, name, "Seeded product");
    }

    info!("Seeding complete!");
    Ok(())
}

//! Demo: drives the cart service end to end with a static catalog, a JSON
//! file store, and the tracing notifier.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run   # full request payloads
//! ```

use std::sync::Arc;
use storefront_cart::catalog::StaticCatalog;
use storefront_cart::lifecycle::{setup_tracing, CartSystem};
use storefront_cart::model::{AmountUpdate, Product, ProductId};
use storefront_cart::notify::TracingNotifier;
use storefront_cart::storage::JsonFileStore;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront cart demo");

    let catalog = StaticCatalog::new()
        .with_product(Product::new(1u32, "Trail Runner", 219.9, "/img/trail-runner.jpg"), 5)
        .with_product(Product::new(2u32, "Court Classic", 149.9, "/img/court-classic.jpg"), 2)
        .with_product(Product::new(3u32, "Studio Flex", 179.9, "/img/studio-flex.jpg"), 0);

    let store = JsonFileStore::new(std::env::temp_dir().join("storefront-cart.json"));

    let system = CartSystem::new(
        Arc::new(catalog),
        Arc::new(store),
        Arc::new(TracingNotifier),
    );
    let client = &system.cart_client;

    let span = tracing::info_span!("cart_session");
    async {
        // Two units of the runner, one of the classic
        client.add_product(ProductId(1)).await.map_err(|e| e.to_string())?;
        client.add_product(ProductId(1)).await.map_err(|e| e.to_string())?;
        client.add_product(ProductId(2)).await.map_err(|e| e.to_string())?;

        // Bump the runner to four units
        client
            .update_product_amount(AmountUpdate {
                product_id: ProductId(1),
                amount: 4,
            })
            .await
            .map_err(|e| e.to_string())?;

        // Out of stock: notified, cart unchanged
        client.add_product(ProductId(3)).await.map_err(|e| e.to_string())?;

        // Changed our mind about the classic
        client.remove_product(ProductId(2)).await.map_err(|e| e.to_string())?;

        let cart = client.cart().await.map_err(|e| e.to_string())?;
        for entry in cart.entries() {
            info!(
                product_id = %entry.id(),
                name = %entry.product.name,
                amount = entry.amount,
                "Cart entry"
            );
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}

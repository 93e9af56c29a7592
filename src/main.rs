mod actors;
mod app_system;
mod clients;
mod domain;
mod error;
mod messages;

#[cfg(test)]
mod mock_framework;

use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, Storefront};
use crate::domain::Product;

fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(
            42,
            "red-shirt",
            "Red Shirt",
            20.0,
            "/images/red-shirt.jpg",
            "Bold red cotton shirt with a classic cut.",
        ),
        Product::new(
            7,
            "blue-hoodie",
            "Blue Hoodie",
            45.0,
            "/images/blue-hoodie.jpg",
            "Fleece-lined hoodie for cold mornings.",
        ),
        Product::new(
            13,
            "canvas-tote",
            "Canvas Tote",
            15.0,
            "/images/canvas-tote.jpg",
            "Sturdy tote for groceries and gear.",
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront");

    let (store, mut navigation) = Storefront::new(demo_catalog());

    let listing = store
        .catalog_client
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    info!(product_count = listing.len(), "Catalog ready");

    // Happy path: open a product page, pick a quantity, add to cart.
    let span = tracing::info_span!("product_browsing");
    async {
        info!("Opening product page");
        let view = store
            .detail_client
            .show_product("red-shirt".to_string())
            .await
            .map_err(|e| e.to_string())?;
        info!(view = ?view, "Product page rendered");

        store.detail_client.increment().await.map_err(|e| e.to_string())?;
        let quantity = store
            .detail_client
            .increment()
            .await
            .map_err(|e| e.to_string())?;
        info!(quantity, "Quantity selected");

        store
            .detail_client
            .add_to_cart()
            .await
            .map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let items = store
        .cart_client
        .get_items()
        .await
        .map_err(|e| e.to_string())?;
    info!(line_count = items.len(), "Cart contents fetched");

    // A dead link: the view redirects home instead of rendering.
    let span = tracing::info_span!("dead_link");
    async {
        let view = store
            .detail_client
            .show_product("sold-out-special".to_string())
            .await
            .map_err(|e| e.to_string())?;
        info!(view = ?view, "Product page outcome");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    if let Some(request) = navigation.recv().await {
        info!(request = ?request, "Performing hard redirect");
    }

    store.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::actors::{CartService, CatalogService, DetailService};
use crate::clients::{CartClient, CatalogClient, DetailClient, NavigatorClient};
use crate::domain::{Catalog, Product};
use crate::messages::NavigationRequest;

const CHANNEL_BUFFER: usize = 32;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling
/// shutdown. The navigation receiver is handed back to the caller: redirects
/// are the shell's job, not any actor's.
pub struct Storefront {
    pub detail_client: DetailClient,
    pub cart_client: CartClient,
    pub catalog_client: CatalogClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    pub fn new(products: Vec<Product>) -> (Self, mpsc::Receiver<NavigationRequest>) {
        let (navigator, navigation) = NavigatorClient::channel(CHANNEL_BUFFER);

        // 1. Catalog service, seeded once, read-only from here on
        let (catalog_actor, catalog_client) =
            CatalogService::new(CHANNEL_BUFFER, Catalog::new(products));
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // 2. Cart service
        let (cart_actor, cart_client) = CartService::new(CHANNEL_BUFFER);
        let cart_handle = tokio::spawn(cart_actor.run());

        // 3. Detail view service, wired to both plus the navigation channel
        let (detail_actor, detail_client) = DetailService::new(
            CHANNEL_BUFFER,
            catalog_client.clone(),
            cart_client.clone(),
            navigator,
        );
        let detail_handle = tokio::spawn(detail_actor.run());

        let system = Self {
            detail_client,
            cart_client,
            catalog_client,
            handles: vec![catalog_handle, cart_handle, detail_handle],
        };
        (system, navigation)
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // Detail first: it holds clients into the other two.
        let _ = self.detail_client.shutdown().await;
        let _ = self.cart_client.shutdown().await;
        let _ = self.catalog_client.shutdown().await;

        // Drop clients so the channels close even for services that already
        // drained their mailbox.
        drop(self.detail_client);
        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

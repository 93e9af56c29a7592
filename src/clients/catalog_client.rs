use tokio::sync::mpsc;
use tracing::debug;

use crate::client_method;
use crate::domain::Product;
use crate::error::CatalogError;
use crate::messages::CatalogRequest;

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) -> Result<(), CatalogError> {
        debug!("Sending shutdown");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|_| CatalogError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CatalogClient => fn find_by_slug(slug: String) -> Option<Product> as CatalogRequest::FindBySlug, Error = CatalogError);
client_method!(CatalogClient => fn list_products() -> Vec<Product> as CatalogRequest::ListProducts, Error = CatalogError);

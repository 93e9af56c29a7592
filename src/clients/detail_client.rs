use tokio::sync::mpsc;
use tracing::debug;

use crate::client_method;
use crate::domain::ViewState;
use crate::error::DetailError;
use crate::messages::DetailRequest;

/// Client for interacting with the product-detail view actor.
///
/// Mirrors the interactions available on the rendered page: route to a
/// product, adjust the quantity, add to cart.
#[derive(Clone)]
pub struct DetailClient {
    sender: mpsc::Sender<DetailRequest>,
}

impl DetailClient {
    pub fn new(sender: mpsc::Sender<DetailRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) -> Result<(), DetailError> {
        debug!("Sending shutdown");
        self.sender
            .send(DetailRequest::Shutdown)
            .await
            .map_err(|_| DetailError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(DetailClient => fn show_product(slug: String) -> ViewState as DetailRequest::ShowProduct, Error = DetailError);
client_method!(DetailClient => fn increment() -> u32 as DetailRequest::Increment, Error = DetailError);
client_method!(DetailClient => fn decrement() -> u32 as DetailRequest::Decrement, Error = DetailError);
client_method!(DetailClient => fn add_to_cart() -> () as DetailRequest::AddToCart, Error = DetailError);

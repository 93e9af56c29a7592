use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use crate::client_method;
use crate::domain::CartItem;
use crate::error::CartError;
use crate::messages::CartRequest;

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Submit one line item, fire-and-forget. The cart owns merge semantics;
    /// submitters never await or inspect a result.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: CartItem) {
        debug!("Sending request");
        if self.sender.send(CartRequest::AddItem { item }).await.is_err() {
            warn!("Cart service unavailable, add_item dropped");
        }
    }

    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn get_items() -> Vec<CartItem> as CartRequest::GetItems, Error = CartError);

//! # Mock Framework
//!
//! Utilities for testing clients and the detail service in isolation.
//!
//! Use the `mock_*_client` constructors to get a client and a receiver, then
//! helpers like [`expect_find_by_slug`] or [`expect_add_item`] to assert the
//! exact requests the code under test emits.

use tokio::sync::mpsc;

use crate::clients::{CartClient, CatalogClient, NavigatorClient};
use crate::domain::{CartItem, Product};
use crate::error::CatalogError;
use crate::messages::{CartRequest, CatalogRequest, NavigationRequest, ServiceResponse};

/// Creates a mock catalog client and a receiver for asserting requests.
///
/// # Testing Strategy
/// We don't spin up a full service when only the caller's wiring is under
/// test. The mock client sends to a channel the test controls; the test
/// inspects arriving messages and plays the service's part deterministically
/// (success, miss, failure).
pub fn mock_catalog_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

pub fn mock_cart_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

pub fn mock_navigator(buffer_size: usize) -> (NavigatorClient, mpsc::Receiver<NavigationRequest>) {
    NavigatorClient::channel(buffer_size)
}

/// Helper to verify that the next message is a FindBySlug request
pub async fn expect_find_by_slug(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(String, ServiceResponse<Option<Product>, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::FindBySlug { slug, respond_to }) => Some((slug, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an AddItem submission
pub async fn expect_add_item(receiver: &mut mpsc::Receiver<CartRequest>) -> Option<CartItem> {
    match receiver.recv().await {
        Some(CartRequest::AddItem { item }) => Some(item),
        _ => None,
    }
}

/// Helper to verify that the next message is a hard redirect
pub async fn expect_replace(receiver: &mut mpsc::Receiver<NavigationRequest>) -> Option<String> {
    match receiver.recv().await {
        Some(NavigationRequest::Replace { path }) => Some(path),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog_client() {
        let (client, mut receiver) = mock_catalog_client(10);

        let lookup_task = tokio::spawn(async move {
            client.find_by_slug("red-shirt".to_string()).await
        });

        let (slug, responder) = expect_find_by_slug(&mut receiver)
            .await
            .expect("Expected FindBySlug request");
        assert_eq!(slug, "red-shirt");
        responder.send(Ok(None)).unwrap();

        let result = lookup_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }
}

use tokio::sync::oneshot;

use crate::domain::{CartItem, Product, ViewState};
use crate::error::{CartError, CatalogError, DetailError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Path a lookup miss redirects to.
pub const HOME_PATH: &str = "/";

/// Typed message enums for actor communication. Each variant includes
/// parameters and a oneshot channel for responses, except for the
/// fire-and-forget mutations that deliberately carry none.

#[derive(Debug)]
pub enum CatalogRequest {
    FindBySlug {
        slug: String,
        respond_to: ServiceResponse<Option<Product>, CatalogError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, CatalogError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum CartRequest {
    /// Append-or-merge one line item. No response channel: submitters do
    /// not await or inspect a result.
    AddItem { item: CartItem },
    GetItems {
        respond_to: ServiceResponse<Vec<CartItem>, CartError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum DetailRequest {
    ShowProduct {
        slug: String,
        respond_to: ServiceResponse<ViewState, DetailError>,
    },
    Increment {
        respond_to: ServiceResponse<u32, DetailError>,
    },
    Decrement {
        respond_to: ServiceResponse<u32, DetailError>,
    },
    AddToCart {
        respond_to: ServiceResponse<(), DetailError>,
    },
    Shutdown,
}

/// Navigation side effects produced by views and consumed by the
/// application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationRequest {
    /// Hard replace: the consumer discards current view state.
    Replace { path: String },
}

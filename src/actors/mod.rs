use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::{CartClient, CatalogClient, DetailClient, NavigatorClient};
use crate::domain::{Cart, CartItem, Catalog, Product, Selection, ViewState};
use crate::error::{CartError, CatalogError, DetailError};
use crate::messages::{CartRequest, CatalogRequest, DetailRequest, ServiceResponse, HOME_PATH};

// =============================================================================
// CATALOG SERVICE
// =============================================================================

/// Serves read-only product lookups over the seeded catalog.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(buffer_size: usize, catalog: Catalog) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, catalog };
        let client = CatalogClient::new(sender);
        (service, client)
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!(product_count = self.catalog.len(), "CatalogService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::FindBySlug { slug, respond_to } => {
                    self.handle_find_by_slug(slug, respond_to);
                }
                CatalogRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
            }
        }

        info!("CatalogService stopped");
    }

    /// In-order scan for the first entry matching the slug. A miss is a
    /// normal outcome, not an error.
    #[instrument(fields(slug = %slug), skip(self, respond_to))]
    fn handle_find_by_slug(
        &self,
        slug: String,
        respond_to: ServiceResponse<Option<Product>, CatalogError>,
    ) {
        debug!("Processing find_by_slug request");

        let product = self.catalog.find_by_slug(&slug).cloned();

        match &product {
            Some(product) => info!(product_name = %product.name, "Product found"),
            None => debug!("No product for slug"),
        }

        let _ = respond_to.send(Ok(product));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(
        &self,
        respond_to: ServiceResponse<Vec<Product>, CatalogError>,
    ) {
        debug!("Processing list_products request");
        let _ = respond_to.send(Ok(self.catalog.products().to_vec()));
    }
}

// =============================================================================
// CART SERVICE
// =============================================================================

/// Owns the process-wide cart. One mailbox serializes all submitters; merge
/// semantics live here, not in the views.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
}

impl CartService {
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cart: Cart::default(),
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem { item } => {
                    self.handle_add_item(item);
                }
                CartRequest::GetItems { respond_to } => {
                    self.handle_get_items(respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(fields(product_id = %item.product_id, quantity = item.quantity), skip(self, item))]
    fn handle_add_item(&mut self, item: CartItem) {
        debug!("Processing add_item request");
        self.cart.add(item);
        info!(line_count = self.cart.len(), "Cart updated");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_items(&self, respond_to: ServiceResponse<Vec<CartItem>, CartError>) {
        debug!("Processing get_items request");
        let _ = respond_to.send(Ok(self.cart.items().to_vec()));
    }
}

// =============================================================================
// DETAIL SERVICE (ROOT ACTOR)
// =============================================================================

/// The product-detail view: resolves slugs through the catalog, keeps the
/// quantity selection, and submits line items to the cart.
///
/// Orchestration actor in the recipe sense: it holds clients for the catalog
/// and cart services plus the navigation channel, and owns no shared state
/// beyond its own selection.
pub struct DetailService {
    receiver: mpsc::Receiver<DetailRequest>,
    catalog_client: CatalogClient,
    cart_client: CartClient,
    navigator: NavigatorClient,
    selection: Selection,
}

impl DetailService {
    pub fn new(
        buffer_size: usize,
        catalog_client: CatalogClient,
        cart_client: CartClient,
        navigator: NavigatorClient,
    ) -> (Self, DetailClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            catalog_client,
            cart_client,
            navigator,
            selection: Selection::new(),
        };
        let client = DetailClient::new(sender);
        (service, client)
    }

    #[instrument(name = "detail_service", skip(self))]
    pub async fn run(mut self) {
        info!("DetailService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DetailRequest::ShowProduct { slug, respond_to } => {
                    self.handle_show_product(slug, respond_to).await;
                }
                DetailRequest::Increment { respond_to } => {
                    self.handle_increment(respond_to);
                }
                DetailRequest::Decrement { respond_to } => {
                    self.handle_decrement(respond_to);
                }
                DetailRequest::AddToCart { respond_to } => {
                    self.handle_add_to_cart(respond_to).await;
                }
                DetailRequest::Shutdown => {
                    info!("DetailService shutting down");
                    break;
                }
            }
        }

        info!("DetailService stopped");
    }

    /// Route change: the previous selection is discarded (quantity back to
    /// the floor) before resolution re-runs from scratch.
    #[instrument(fields(slug = %slug), skip(self, respond_to))]
    async fn handle_show_product(
        &mut self,
        slug: String,
        respond_to: ServiceResponse<ViewState, DetailError>,
    ) {
        info!("Processing show_product request");

        self.selection = Selection::new();

        match self.catalog_client.find_by_slug(slug).await {
            Ok(Some(product)) => {
                info!(product_name = %product.name, "Product resolved");
                self.selection.resolve(product.clone());
                let _ = respond_to.send(Ok(ViewState::Showing {
                    product,
                    quantity: self.selection.quantity(),
                }));
            }
            Ok(None) => {
                // Miss is not an error: redirect home and leave the view
                // unresolved. Exactly one navigation per miss.
                info!(path = HOME_PATH, "No product for slug, redirecting");
                self.navigator.replace(HOME_PATH).await;
                let _ = respond_to.send(Ok(ViewState::Redirecting));
            }
            Err(e) => {
                error!(error = %e, "Catalog lookup failed");
                let _ = respond_to.send(Err(DetailError::CatalogUnavailable(e.to_string())));
            }
        }
    }

    /// **Sync handler** - quantity mutation touches nothing but the selection.
    #[instrument(skip(self, respond_to))]
    fn handle_increment(&mut self, respond_to: ServiceResponse<u32, DetailError>) {
        let quantity = self.selection.increment();
        debug!(quantity, "Quantity incremented");
        let _ = respond_to.send(Ok(quantity));
    }

    /// Decrement clamps at the floor; hitting it is a silent no-op.
    #[instrument(skip(self, respond_to))]
    fn handle_decrement(&mut self, respond_to: ServiceResponse<u32, DetailError>) {
        let quantity = self.selection.decrement();
        debug!(quantity, "Quantity decremented");
        let _ = respond_to.send(Ok(quantity));
    }

    /// Submission forwards one line item to the cart, fire-and-forget, and
    /// keeps the quantity as-is for further submissions.
    #[instrument(skip(self, respond_to))]
    async fn handle_add_to_cart(&mut self, respond_to: ServiceResponse<(), DetailError>) {
        info!("Processing add_to_cart request");

        let Some(product) = self.selection.product() else {
            warn!("Add to cart requested with nothing shown");
            let _ = respond_to.send(Err(DetailError::NothingShown));
            return;
        };

        let item = CartItem::new(product.id, self.selection.quantity());
        info!(product_id = %item.product_id, quantity = item.quantity, "Submitting cart item");
        self.cart_client.add_item(item).await;

        let _ = respond_to.send(Ok(()));
    }
}

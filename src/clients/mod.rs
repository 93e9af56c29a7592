mod macros;

pub mod cart_client;
pub mod catalog_client;
pub mod detail_client;
pub mod navigator_client;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use detail_client::DetailClient;
pub use navigator_client::NavigatorClient;

/// Identifier the cart refers to products by.
pub type ProductId = u64;

/// A product as published in the catalog.
///
/// Catalog entries are immutable for the lifetime of the process; the
/// `slug` is the route key, the `id` is what cart line items carry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        slug: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
        }
    }
}

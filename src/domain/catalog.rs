use super::product::Product;

/// Read-only, ordered collection of products, addressable by slug.
///
/// Resolution is a pure function of (catalog, slug): an in-order scan for
/// the first entry whose slug matches, with no caching of prior lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// First product whose slug equals `slug`, in catalog order.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }

    /// The full product listing, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt(id: u64, slug: &str) -> Product {
        Product::new(id, slug, "Shirt", 20.0, "/images/shirt.jpg", "A shirt")
    }

    #[test]
    fn find_by_slug_returns_matching_product() {
        let catalog = Catalog::new(vec![shirt(1, "red-shirt"), shirt(2, "blue-shirt")]);

        let found = catalog.find_by_slug("blue-shirt").expect("should resolve");
        assert_eq!(found.id, 2);
    }

    #[test]
    fn find_by_slug_misses_on_unknown_slug() {
        let catalog = Catalog::new(vec![shirt(1, "red-shirt")]);

        assert!(catalog.find_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn empty_catalog_always_misses() {
        let catalog = Catalog::default();

        assert!(catalog.find_by_slug("red-shirt").is_none());
    }

    #[test]
    fn find_by_slug_takes_first_match_in_order() {
        let catalog = Catalog::new(vec![shirt(1, "red-shirt"), shirt(2, "red-shirt")]);

        let found = catalog.find_by_slug("red-shirt").expect("should resolve");
        assert_eq!(found.id, 1);
    }
}

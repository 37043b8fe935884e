//! # Catalog Store
//!
//! The static, ordered product collection. Built once, read forever: nothing
//! in the engine mutates a catalog after construction, and every pipeline run
//! takes it as a plain slice.
//!
//! The crate ships the original storefront's 25-record demo catalog as an
//! embedded JSON asset; [`Catalog::builtin`] parses it once and hands out a
//! shared reference.

use crate::error::Result;
use crate::model::Product;
use once_cell::sync::Lazy;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    // The embedded asset is validated by tests; a parse failure here is a
    // packaging defect, not a runtime condition.
    Catalog::from_json(BUILTIN_CATALOG).expect("embedded catalog.json is malformed")
});

/// An immutable, ordered collection of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from records already in memory, preserving order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from its JSON feed format (an array of camelCase
    /// product records).
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    /// The demo catalog embedded in the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its opaque id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen catalog order; feeds the sidebar's
    /// collection facets.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_has_the_demo_records() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 25);
        assert!(catalog.categories().contains(&"Abayas"));
    }

    #[test]
    fn builtin_records_are_well_formed() {
        for product in Catalog::builtin().products() {
            assert!(!product.id.is_empty());
            assert!(product.price > rust_decimal::Decimal::ZERO, "{}", product.id);
            assert!((0.0..=5.0).contains(&product.rating), "{}", product.id);
            if let Some(original) = product.original_price {
                assert!(original > product.price, "{}", product.id);
            }
        }
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin();
        let product = catalog.get("1").unwrap();
        assert_eq!(product.name, "Abaya Bordada Oro 24K");
        assert!(catalog.get("no-such-id").is_none());
    }

    #[test]
    fn categories_are_distinct_and_in_first_seen_order() {
        let json = r#"[
            {"id": "1", "name": "A", "description": "", "price": 1.0,
             "currency": "USD", "imageUrl": "", "category": "Hijabs",
             "tags": [], "sizes": [], "colors": [], "rating": 4.0, "inStock": true},
            {"id": "2", "name": "B", "description": "", "price": 1.0,
             "currency": "USD", "imageUrl": "", "category": "Abayas",
             "tags": [], "sizes": [], "colors": [], "rating": 4.0, "inStock": true},
            {"id": "3", "name": "C", "description": "", "price": 1.0,
             "currency": "USD", "imageUrl": "", "category": "Hijabs",
             "tags": [], "sizes": [], "colors": [], "rating": 4.0, "inStock": true}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.categories(), vec!["Hijabs", "Abayas"]);
    }

    #[test]
    fn malformed_feed_is_a_catalog_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::VitrinaError::Catalog(_)));
    }

    #[test]
    fn empty_feed_is_a_valid_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}

//! Product catalog module.
//!
//! Contains the product and category types and the immutable [`Catalog`]
//! the storefront browses.

mod category;
mod product;
mod sample;

pub use category::Category;
pub use product::{Product, MAX_RATING};

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::search::{self, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The immutable set of purchasable products and their categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking every product invariant.
    ///
    /// Product ids must be unique, prices non-negative and ratings within
    /// 0-5. Products may reference categories that are not listed.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            product
                .validate()
                .map_err(|reason| CommerceError::InvalidProduct {
                    id: product.id.to_string(),
                    reason,
                })?;
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            categories,
            products,
        })
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// The document is an object with `categories` and `products` arrays,
    /// using the same camelCase field names the storefront data files use.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.products)
    }

    /// The built-in sample catalog: 6 categories, 8 products.
    pub fn sample() -> Self {
        sample::sample_catalog()
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in sidebar order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is unknown.
    pub fn require_product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a category by id, failing if it is unknown.
    pub fn require_category(&self, id: &CategoryId) -> Result<&Category, CommerceError> {
        self.category(id)
            .ok_or_else(|| CommerceError::CategoryNotFound(id.to_string()))
    }

    /// Run a listing query against this catalog.
    pub fn query(&self, filter: &QueryFilter) -> Vec<&Product> {
        search::query(&self.products, filter)
    }

    /// Products flagged as bestsellers, in catalog order.
    pub fn bestsellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_bestseller).collect()
    }

    /// Products flagged as new arrivals, in catalog order.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Other products from the same category, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == product.category_id && p.id != product.id)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_duplicate_product_rejected() {
        let products = vec![
            Product::new("1", "A", Money::from_cents(100), "tools"),
            Product::new("1", "B", Money::from_cents(200), "tools"),
        ];
        let err = Catalog::new(Vec::new(), products).unwrap_err();
        assert_eq!(err, CommerceError::DuplicateProduct("1".to_string()));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let products = vec![Product::new("1", "A", Money::from_cents(-100), "tools")];
        let err = Catalog::new(Vec::new(), products).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProduct { ref id, .. } if id == "1"));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.product(&ProductId::new("7")).map(|p| p.name.as_str()),
            Some("Urban Commuter Helmet")
        );
        assert!(catalog.product(&ProductId::new("99")).is_none());
        assert_eq!(
            catalog.require_product(&ProductId::new("99")).unwrap_err(),
            CommerceError::ProductNotFound("99".to_string())
        );
        assert!(catalog.require_category(&CategoryId::new("lights")).is_ok());
    }

    #[test]
    fn test_related_products() {
        let catalog = Catalog::sample();
        let helmet = catalog.product(&ProductId::new("1")).unwrap();
        let related: Vec<_> = catalog.related(helmet, 3).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(related, vec!["7"]);
    }

    #[test]
    fn test_home_page_sections() {
        let catalog = Catalog::sample();
        let bestsellers: Vec<_> = catalog.bestsellers().iter().map(|p| p.id.as_str()).collect();
        let new_arrivals: Vec<_> = catalog.new_arrivals().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(bestsellers, vec!["1", "3", "8"]);
        assert_eq!(new_arrivals, vec!["2", "6"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [{"id": "tools", "name": "Tools", "icon": "🔧", "productCount": 32}],
            "products": [{
                "id": "4",
                "name": "Multi-Tool Pro 19",
                "price": 44.99,
                "image": "https://example.com/tool.jpg",
                "category": "tools",
                "brand": "CycleFix",
                "rating": 4.6,
                "reviews": 203,
                "description": "Compact 19-function multi-tool.",
                "specifications": {"Functions": "19"},
                "inStock": true
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let tool = catalog.product(&ProductId::new("4")).unwrap();
        assert_eq!(tool.price, Money::from_cents(4499));
        assert_eq!(tool.review_count, 203);
        assert!(!tool.is_new);
        assert_eq!(catalog.categories()[0].product_count, 32);
    }

    #[test]
    fn test_from_json_rejects_bad_rating() {
        let json = r#"{"categories": [], "products": [{
            "id": "4", "name": "x", "price": 1, "category": "tools", "brand": "b",
            "rating": 7, "reviews": 0, "description": "", "inStock": true
        }]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}

//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are defined once when the catalog is built and never mutated
/// afterwards; the cart keeps its own copy on each line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount price, shown struck through when higher than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Product image URL.
    #[serde(default, rename = "image")]
    pub image_url: String,
    /// Category this product is listed under.
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    /// Brand name.
    pub brand: String,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(rename = "reviews")]
    pub review_count: u32,
    /// Free-text description.
    pub description: String,
    /// Specification label to value (e.g. "Weight" → "245g").
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Flagged as a new arrival.
    #[serde(default)]
    pub is_new: bool,
    /// Flagged as a bestseller.
    #[serde(default)]
    pub is_bestseller: bool,
}

impl Product {
    /// Create an in-stock product with no ratings or specifications yet.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image_url: String::new(),
            category_id: category_id.into(),
            brand: String::new(),
            rating: 0.0,
            review_count: 0,
            description: String::new(),
            specifications: BTreeMap::new(),
            in_stock: true,
            is_new: false,
            is_bestseller: false,
        }
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a specification row.
    pub fn with_specification(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(label.into(), value.into());
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Flag as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Flag as a bestseller.
    pub fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Look up a specification value by label.
    pub fn specification(&self, label: &str) -> Option<&str> {
        self.specifications.get(label).map(String::as_str)
    }

    /// Check if the product is marked down (original price above price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Amount saved against the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Discount percentage against the original price, if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        let original = self.original_price.filter(|original| *original > self.price)?;
        let savings = original.amount() - self.price.amount();
        savings
            .checked_div(original.amount())
            .and_then(|ratio| (ratio * Decimal::ONE_HUNDRED).to_f64())
    }

    /// Number of filled stars in the rating row.
    pub fn filled_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Badges shown on the product card, in display order.
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.is_new {
            badges.push("NEW");
        }
        if self.is_bestseller {
            badges.push("BESTSELLER");
        }
        if self.original_price.is_some() {
            badges.push("SALE");
        }
        badges
    }

    /// Check the invariants a catalog entry must satisfy.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("empty product id".to_string());
        }
        if self.price.is_negative() {
            return Err(format!("negative price {}", self.price));
        }
        if let Some(original) = self.original_price {
            if original.is_negative() {
                return Err(format!("negative original price {}", original));
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(format!("rating {} outside 0-5", self.rating));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gloves() -> Product {
        Product::new("3", "GripMaster Pro Gloves", Money::from_cents(5999), "gloves")
            .with_original_price(Money::from_cents(7999))
            .with_rating(4.7, 156)
            .with_specification("Padding", "4mm gel")
            .bestseller()
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new("9", "Tire Lever", Money::from_cents(499), "tools");
        assert_eq!(product.id, ProductId::new("9"));
        assert!(product.in_stock);
        assert!(!product.is_new);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_out_of_stock_product() {
        let product = gloves().with_stock(false);
        assert!(!product.in_stock);
        assert!(product.validate().is_ok());

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["inStock"], false);
    }

    #[test]
    fn test_product_on_sale() {
        let product = gloves();
        assert!(product.is_on_sale());
        assert_eq!(product.savings(), Some(Money::from_cents(2000)));
        let discount = product.discount_percentage().unwrap();
        assert!((discount - 25.003).abs() < 0.01);
    }

    #[test]
    fn test_product_not_on_sale_without_markdown() {
        let product = Product::new("9", "Tire Lever", Money::from_cents(499), "tools")
            .with_original_price(Money::from_cents(499));
        assert!(!product.is_on_sale());
        assert_eq!(product.savings(), None);
        assert_eq!(product.discount_percentage(), None);
    }

    #[test]
    fn test_specification_lookup() {
        let product = gloves();
        assert_eq!(product.specification("Padding"), Some("4mm gel"));
        assert_eq!(product.specification("Weight"), None);
    }

    #[test]
    fn test_filled_stars_floor_rating() {
        assert_eq!(gloves().filled_stars(), 4);
        let product = Product::new("9", "x", Money::zero(), "tools").with_rating(5.0, 1);
        assert_eq!(product.filled_stars(), 5);
    }

    #[test]
    fn test_badges() {
        assert_eq!(gloves().badges(), vec!["BESTSELLER", "SALE"]);
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let product = Product::new("9", "x", Money::zero(), "tools").with_rating(5.5, 1);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let product = Product::new("9", "x", Money::from_cents(-1), "tools");
        assert!(product.validate().is_err());
    }
}

//! Listing filter.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};

/// Upper bound of the listing price slider.
pub const DEFAULT_MAX_PRICE_CENTS: i64 = 50_000;

/// What the product listing shows: one category (or all), a price range
/// and a sort order.
///
/// Held by the view and passed into [`query`](crate::search::query) on
/// every render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryFilter {
    /// Category to show; `None` or an empty id means all categories.
    pub category: Option<CategoryId>,
    /// Inclusive lower price bound.
    pub min_price: Money,
    /// Inclusive upper price bound.
    pub max_price: Money,
    /// Sort order.
    pub sort: SortOption,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            category: None,
            min_price: Money::zero(),
            max_price: Money::from_cents(DEFAULT_MAX_PRICE_CENTS),
            sort: SortOption::Featured,
        }
    }
}

impl QueryFilter {
    /// Create the default filter: every category, $0-$500, featured order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the inclusive price range.
    ///
    /// `min > max` is accepted and matches nothing.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// The effective category, treating an empty id as "all".
    pub fn active_category(&self) -> Option<&CategoryId> {
        self.category.as_ref().filter(|id| !id.is_empty())
    }

    /// Clear the category, as the sidebar's "All Products" does.
    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Select a category, or deselect it if it is already selected.
    pub fn toggle_category(&mut self, category: &CategoryId) {
        if self.active_category() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.clone());
        }
    }

    /// Check whether a product passes the category and price filters.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.active_category() {
            if &product.category_id != category {
                return false;
            }
        }
        self.min_price <= product.price && product.price <= self.max_price
    }
}

//! Listing sort options and the catalog query.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::QueryFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// New arrivals first, each group kept in catalog order.
    Newest,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    /// Every option, in the order the sort dropdown lists them.
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::Newest => "Newest",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort products for a listing.
///
/// Starts from `products` in their given order, keeps the ones matching
/// the filter's category and inclusive price range, then orders them by the
/// filter's sort key. Every sort is stable, so ties keep catalog order and
/// the same inputs always give the same output.
pub fn query<'a>(products: &'a [Product], filter: &QueryFilter) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();

    match filter.sort {
        SortOption::Featured => {}
        SortOption::PriceLow => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Newest => {
            // No timestamps in the catalog; "newest" is the is_new flag.
            let (mut new, rest): (Vec<_>, Vec<_>) = result.into_iter().partition(|p| p.is_new);
            new.extend(rest);
            result = new;
        }
    }

    tracing::trace!(
        category = filter.active_category().map(|c| c.as_str()),
        sort = %filter.sort,
        matched = result.len(),
        "catalog query"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::Money;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!("price-low".parse::<SortOption>().unwrap(), SortOption::PriceLow);
        assert_eq!("RATING".parse::<SortOption>().unwrap(), SortOption::Rating);
        assert_eq!(
            "cheapest".parse::<SortOption>().unwrap_err(),
            CommerceError::UnknownSortKey("cheapest".to_string())
        );
    }

    #[test]
    fn test_sort_option_round_trips_through_name() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
    }

    #[test]
    fn test_featured_keeps_catalog_order() {
        let catalog = Catalog::sample();
        let result = query(catalog.products(), &QueryFilter::new());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_price_low_and_high() {
        let catalog = Catalog::sample();
        let low = query(catalog.products(), &QueryFilter::new().with_sort(SortOption::PriceLow));
        assert_eq!(ids(&low), vec!["8", "5", "4", "6", "3", "2", "7", "1"]);

        let high = query(catalog.products(), &QueryFilter::new().with_sort(SortOption::PriceHigh));
        assert_eq!(ids(&high), vec!["1", "7", "2", "3", "6", "4", "5", "8"]);
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = Catalog::sample();
        let result = query(catalog.products(), &QueryFilter::new().with_sort(SortOption::Rating));
        // 4.9, then 4.8 (1, 6), 4.7 (3, 8), 4.6 (4, 7), 4.5
        assert_eq!(ids(&result), vec!["2", "1", "6", "3", "8", "4", "7", "5"]);
    }

    #[test]
    fn test_newest_is_stable_partition() {
        let catalog = Catalog::sample();
        let result = query(catalog.products(), &QueryFilter::new().with_sort(SortOption::Newest));
        assert_eq!(ids(&result), vec!["2", "6", "1", "3", "4", "5", "7", "8"]);
    }

    #[test]
    fn test_category_and_price_filters_combine() {
        let catalog = Catalog::sample();
        let filter = QueryFilter::new()
            .with_category("spare-parts")
            .with_price_range(Money::from_cents(3000), Money::from_cents(5000));
        let result = query(catalog.products(), &filter);
        assert_eq!(ids(&result), vec!["5"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::sample();
        let result = query(catalog.products(), &QueryFilter::new().with_category("wheels"));
        assert!(result.is_empty());
    }
}

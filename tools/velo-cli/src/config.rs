//! CLI configuration.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use velo_commerce::prelude::*;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Listing defaults.
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Store metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// JSON catalog to load instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

fn default_store_name() -> String {
    "Velo".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog_path: None,
        }
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Subtotals at or above this ship free.
    pub free_shipping_threshold: Decimal,

    /// Shipping charged below the threshold.
    pub flat_shipping_rate: Decimal,

    /// Tax rate (0.08 = 8%).
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let policy = PricingPolicy::default();
        Self {
            free_shipping_threshold: policy.free_shipping_threshold.amount(),
            flat_shipping_rate: policy.flat_shipping_rate.amount(),
            tax_rate: policy.tax_rate,
        }
    }
}

impl PricingConfig {
    /// The pricing policy these settings describe.
    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            free_shipping_threshold: Money::new(self.free_shipping_threshold),
            flat_shipping_rate: Money::new(self.flat_shipping_rate),
            tax_rate: self.tax_rate,
        }
    }
}

/// Listing defaults for `velo products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Lower price bound.
    pub default_min_price: Decimal,

    /// Upper price bound.
    pub default_max_price: Decimal,

    /// Sort key (featured, newest, price-low, price-high, rating).
    pub default_sort: String,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        let filter = QueryFilter::default();
        Self {
            default_min_price: filter.min_price.amount(),
            default_max_price: filter.max_price.amount(),
            default_sort: filter.sort.as_str().to_string(),
        }
    }
}

impl BrowseConfig {
    /// The listing filter these defaults describe.
    pub fn filter(&self) -> Result<QueryFilter> {
        let sort: SortOption = self
            .default_sort
            .parse()
            .context("Invalid browse.default_sort")?;

        Ok(QueryFilter::new()
            .with_price_range(Money::new(self.default_min_price), Money::new(self.default_max_price))
            .with_sort(sort))
    }
}

/// Generate a default velo.toml config file.
pub fn generate_default_config(name: &str) -> String {
    let pricing = PricingConfig::default();
    let browse = BrowseConfig::default();
    format!(
        r#"# Velo storefront configuration

[store]
name = {name}
# catalog_path = "catalog.json"

[pricing]
free_shipping_threshold = {threshold}
flat_shipping_rate = {shipping}
tax_rate = {tax}

[browse]
default_min_price = {min}
default_max_price = {max}
default_sort = "{sort}"
"#,
        name = toml::Value::String(name.to_string()),
        threshold = pricing.free_shipping_threshold,
        shipping = pricing.flat_shipping_rate,
        tax = pricing.tax_rate,
        min = browse.default_min_price,
        max = browse.default_max_price,
        sort = browse.default_sort,
    )
}

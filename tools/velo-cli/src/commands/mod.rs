//! CLI command implementations.

pub mod categories;
pub mod checkout;
pub mod config;
pub mod products;
pub mod quote;
pub mod show;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use velo_commerce::prelude::*;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Maximum price.
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Sort order (featured, newest, price-low, price-high, rating).
    #[arg(short, long)]
    pub sort: Option<SortOption>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,

    /// Maximum related products to list.
    #[arg(long, default_value = "3")]
    pub related: usize,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Items as ID or ID:QTY.
    #[arg(required = true)]
    pub items: Vec<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Items as ID or ID:QTY.
    #[arg(required = true)]
    pub items: Vec<String>,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email for the order confirmation.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Street address.
    #[arg(long, default_value = "")]
    pub street: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, default_value = "")]
    pub zip: String,

    /// Payment method (card, paypal, upi).
    #[arg(short, long, default_value = "card")]
    pub payment: PaymentMethod,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

impl CheckoutArgs {
    /// Shipping details from the flags.
    pub fn address(&self) -> Address {
        Address {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
        }
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse an `ID` or `ID:QTY` item argument.
pub fn parse_item(item: &str) -> Result<(ProductId, i64)> {
    let (id, quantity) = match item.split_once(':') {
        Some((id, qty)) => {
            let quantity: i64 = qty
                .trim()
                .parse()
                .with_context(|| format!("Invalid quantity in '{}'", item))?;
            (id.trim(), quantity)
        }
        None => (item.trim(), 1),
    };

    if id.is_empty() {
        bail!("Missing product ID in '{}'", item);
    }
    if quantity < 1 {
        bail!("Quantity must be at least 1 in '{}'", item);
    }

    Ok((ProductId::new(id), quantity))
}

/// Add every item argument to the session's cart.
pub fn fill_cart(session: &StorefrontSession, items: &[String]) -> Result<()> {
    for item in items {
        let (id, quantity) = parse_item(item)?;
        let product = session.add_quantity_by_id(&id, quantity)?;
        tracing::debug!(product = %product.id, quantity, "added to cart");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("3").unwrap(), (ProductId::new("3"), 1));
        assert_eq!(parse_item("3:2").unwrap(), (ProductId::new("3"), 2));
        assert_eq!(parse_item(" 7 : 4 ").unwrap(), (ProductId::new("7"), 4));
    }

    #[test]
    fn test_parse_item_rejects_bad_input() {
        assert!(parse_item("3:x").is_err());
        assert!(parse_item("3:0").is_err());
        assert!(parse_item("3:-1").is_err());
        assert!(parse_item(":2").is_err());
    }

    #[test]
    fn test_fill_cart() {
        let session = StorefrontSession::new(Catalog::sample());
        fill_cart(&session, &["1".to_string(), "3:2".to_string(), "1".to_string()]).unwrap();

        let cart = session.cart().snapshot();
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(session.pricing().grand_total.display(), "$669.56");
    }

    #[test]
    fn test_fill_cart_huge_quantities() {
        let session = StorefrontSession::new(Catalog::sample());
        let max = i64::MAX.to_string();
        fill_cart(&session, &[format!("1:{}", max), format!("3:{}", max)]).unwrap();

        assert_eq!(session.cart().item_count(), i64::MAX);
        assert!(session.pricing().is_free_shipping());
    }

    #[test]
    fn test_show_lists_three_related_by_default() {
        #[derive(clap::Parser)]
        struct ShowCli {
            #[command(flatten)]
            show: ShowArgs,
        }

        let cli = <ShowCli as clap::Parser>::try_parse_from(["velo", "1"]).unwrap();
        assert_eq!(cli.show.id, "1");
        assert_eq!(cli.show.related, 3);
    }

    #[test]
    fn test_fill_cart_unknown_product() {
        let session = StorefrontSession::new(Catalog::sample());
        let err = fill_cart(&session, &["42".to_string()]).unwrap_err();
        assert!(err.to_string().contains("42"));
    }
}

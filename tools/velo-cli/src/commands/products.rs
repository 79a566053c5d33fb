//! Product listing.

use anyhow::Result;
use velo_commerce::prelude::*;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{badge, price_tag, stars};

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filter = build_filter(&args, ctx)?;

    if let Some(category) = filter.active_category() {
        if catalog.category(category).is_none() {
            ctx.output.warn(&format!("Unknown category '{}'", category));
        }
    }

    let products = catalog.query(&filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = match filter.active_category().and_then(|id| catalog.category(id)) {
        Some(category) => category.name.clone(),
        None => "All Products".to_string(),
    };
    ctx.output.header(&title);
    ctx.output.info(&format!(
        "{} products, {} to {}, sorted by {}",
        products.len(),
        filter.min_price.display(),
        filter.max_price.display(),
        filter.sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    let widths = [4, 26, 10, 6];
    for product in products {
        let badges: Vec<String> = product.badges().into_iter().map(badge).collect();
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.price.display(),
                &stars(product),
            ],
            &widths,
        );
        if product.is_on_sale() || !badges.is_empty() {
            ctx.output
                .list_item(&format!("{}  {}", price_tag(product), badges.join(" ")));
        }
    }

    Ok(())
}

/// Listing filter: configured defaults overridden by flags.
fn build_filter(args: &ProductsArgs, ctx: &Context) -> Result<QueryFilter> {
    let mut filter = ctx.config.browse.filter()?;

    if let Some(category) = &args.category {
        filter = filter.with_category(category.as_str());
    }
    if let Some(min) = args.min {
        filter.min_price = Money::new(min);
    }
    if let Some(max) = args.max {
        filter.max_price = Money::new(max);
    }
    if let Some(sort) = args.sort {
        filter = filter.with_sort(sort);
    }

    Ok(filter)
}

//! Product detail view.

use anyhow::Result;
use serde::Serialize;
use velo_commerce::prelude::*;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{badge, price_tag, stars};

#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    related: Vec<&'a Product>,
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require_product(&ProductId::new(args.id.as_str()))?;
    let related = catalog.related(product, args.related);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail { product, related });
        return Ok(());
    }

    ctx.output.header(&product.name);
    let badges: Vec<String> = product.badges().into_iter().map(badge).collect();
    if !badges.is_empty() {
        ctx.output.info(&badges.join(" "));
    }

    if !product.brand.is_empty() {
        ctx.output.kv("Brand", &product.brand);
    }
    if let Some(category) = catalog.category(&product.category_id) {
        ctx.output.kv("Category", &category.label());
    }
    ctx.output.kv("Price", &price_tag(product));
    if let (Some(savings), Some(percent)) = (product.savings(), product.discount_percentage()) {
        ctx.output.kv("You save", &format!("{} ({:.0}%)", savings.display(), percent));
    }
    ctx.output.kv(
        "Rating",
        &format!("{} {} ({} reviews)", stars(product), product.rating, product.review_count),
    );
    ctx.output.kv("Stock", if product.in_stock { "In stock" } else { "Out of stock" });

    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for (label, value) in &product.specifications {
            ctx.output.kv(label, value);
        }
    }

    if !related.is_empty() {
        ctx.output.header("Related products");
        for other in related {
            ctx.output
                .list_item(&format!("{} {} ({})", other.id, other.name, other.price.display()));
        }
    }

    Ok(())
}

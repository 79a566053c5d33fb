//! Cart pricing without checkout.

use anyhow::Result;
use serde::Serialize;
use velo_commerce::prelude::*;

use super::{fill_cart, QuoteArgs};
use crate::context::Context;

#[derive(Serialize)]
struct Quote {
    cart: Cart,
    pricing: CartPricing,
}

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    fill_cart(&session, &args.items)?;

    let cart = session.cart().snapshot();
    let pricing = session.pricing();

    if ctx.output.is_json() {
        ctx.output.json(&Quote { cart, pricing });
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    print_lines(&cart, ctx);

    ctx.output.info("");
    ctx.output.pricing(&pricing, session.policy());

    if let Some(remaining) = pricing.amount_to_free_shipping() {
        ctx.output.info(&format!("Add {} more for free shipping!", remaining.display()));
    }

    Ok(())
}

/// Print one row per cart line.
pub fn print_lines(cart: &Cart, ctx: &Context) {
    let widths = [4, 26, 5, 10];
    for line in cart.lines() {
        ctx.output.table_row(
            &[
                line.product.id.as_str(),
                &line.product.name,
                &format!("x{}", line.quantity),
                &line.line_total().display(),
            ],
            &widths,
        );
    }
}

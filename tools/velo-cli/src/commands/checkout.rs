//! Checkout command.

use anyhow::{bail, Result};
use chrono::DateTime;
use dialoguer::Confirm;
use velo_commerce::prelude::*;

use super::quote::print_lines;
use super::{fill_cart, CheckoutArgs};
use crate::context::Context;

const FORM_STEPS: usize = CheckoutStep::FORM_STEPS.len();

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    fill_cart(&session, &args.items)?;

    let mut flow = session.begin_checkout()?;
    ctx.output.header(&format!("{} checkout", ctx.config.store.name));

    // Step 1: Shipping
    print_step(&flow, ctx);
    let address = args.address();
    if !address.first_name.is_empty() || !address.last_name.is_empty() {
        ctx.output.kv("Ship to", &address.full_name());
    }
    flow.set_shipping_address(address);
    let missing = flow.missing_details();
    if !missing.is_empty() {
        ctx.output.warn(&format!("Missing shipping details: {}", missing.join(", ")));
    }
    expect_moved(session.advance_checkout(&mut flow))?;

    // Step 2: Payment
    print_step(&flow, ctx);
    flow.set_payment_method(args.payment);
    ctx.output.kv("Pay with", flow.payment_method().display_name());
    expect_moved(session.advance_checkout(&mut flow))?;

    // Step 3: Review
    print_step(&flow, ctx);
    let summary = session.cart().read(|cart| {
        print_lines(cart, ctx);
        flow.summary(cart)
    });
    ctx.output.info("");
    ctx.output.pricing(&summary, flow.policy());

    if !args.yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", summary.grand_total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let receipt = match session.advance_checkout(&mut flow) {
        Transition::Completed(receipt) => receipt,
        Transition::ReturnToCart => bail!("Cart was emptied during checkout"),
        other => bail!("Unexpected checkout state: {:?}", other),
    };

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    print_receipt(&receipt, ctx);
    Ok(())
}

fn print_step(flow: &CheckoutFlow, ctx: &Context) {
    let step = flow.step();
    ctx.output
        .step(usize::from(step.number()), FORM_STEPS, step.display_name());
}

fn expect_moved(transition: Transition) -> Result<()> {
    match transition {
        Transition::Moved { .. } => Ok(()),
        Transition::ReturnToCart => bail!("Cart was emptied during checkout"),
        other => bail!("Unexpected checkout state: {:?}", other),
    }
}

fn print_receipt(receipt: &OrderReceipt, ctx: &Context) {
    ctx.output.success(&format!("Order {} placed", receipt.order_id));

    if let Some(placed) = DateTime::from_timestamp(receipt.placed_at, 0) {
        ctx.output
            .kv("Placed", &placed.format("%Y-%m-%d %H:%M UTC").to_string());
    }
    ctx.output.kv("Items", &receipt.item_count().to_string());
    ctx.output.kv("Total", &receipt.pricing.grand_total.display());
    ctx.output.kv("Payment", receipt.payment_method.display_name());

    if let Some(address) = &receipt.shipping_address {
        if address.is_complete() {
            ctx.output.kv("Ship to", &address.one_line());
        }
    }
    if let Some(email) = receipt.confirmation_email() {
        ctx.output.info(&format!("A confirmation has been sent to {}", email));
    }
}

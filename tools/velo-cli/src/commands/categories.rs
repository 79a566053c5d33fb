//! Category listing.

use anyhow::Result;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories());
        return Ok(());
    }

    ctx.output.header(&format!("{} categories", ctx.config.store.name));

    let widths = [14, 20, 8];
    ctx.output.table_row(&["ID", "NAME", "PRODUCTS"], &widths);
    for category in catalog.categories() {
        ctx.output.table_row(
            &[
                category.id.as_str(),
                &category.label(),
                &category.product_count.to_string(),
            ],
            &widths,
        );
    }

    Ok(())
}

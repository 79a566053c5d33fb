//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Store section
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    match &ctx.config.store.catalog_path {
        Some(path) => ctx.output.kv("catalog_path", path),
        None => ctx.output.kv("catalog_path", "(built-in sample)"),
    }

    // Pricing section
    let pricing = &ctx.config.pricing;
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv("free_shipping_threshold", &pricing.free_shipping_threshold.to_string());
    ctx.output.kv("flat_shipping_rate", &pricing.flat_shipping_rate.to_string());
    ctx.output.kv("tax_rate", &pricing.tax_rate.to_string());

    // Browse section
    let browse = &ctx.config.browse;
    ctx.output.info("");
    ctx.output.info("[browse]");
    ctx.output.kv("default_min_price", &browse.default_min_price.to_string());
    ctx.output.kv("default_max_price", &browse.default_max_price.to_string());
    ctx.output.kv("default_sort", &browse.default_sort);

    if let Err(e) = browse.filter() {
        ctx.output.warn(&format!("{:#}", e));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("velo")
        .to_string();

    let content = generate_default_config(&name);
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

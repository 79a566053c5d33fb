//! Velo CLI - Command line storefront for the Velo bicycle-accessories shop.
//!
//! Commands:
//! - `velo categories` - List product categories
//! - `velo products` - Browse the catalog with filters and sorting
//! - `velo show` - Show a product's details
//! - `velo quote` - Price a cart
//! - `velo checkout` - Place an order
//! - `velo config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckoutArgs, ConfigArgs, ProductsArgs, QuoteArgs, ShowArgs};

/// Velo CLI - Browse the catalog, price a cart and check out
#[derive(Parser)]
#[command(name = "velo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List product categories
    Categories,

    /// Browse products
    Products(ProductsArgs),

    /// Show product details
    Show(ShowArgs),

    /// Price a cart without placing an order
    Quote(QuoteArgs),

    /// Check out a cart
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "velo=debug,velo_commerce=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

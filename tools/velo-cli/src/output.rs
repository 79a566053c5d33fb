//! Output formatting for the CLI.

use console::style;
use velo_commerce::catalog::MAX_RATING;
use velo_commerce::prelude::*;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!(
            "{} {}",
            style(format!("[{}/{}]", num, total)).dim(),
            msg
        );
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print the pricing block shown under a cart.
    pub fn pricing(&self, pricing: &CartPricing, policy: &PricingPolicy) {
        if self.json {
            return;
        }
        self.kv("Subtotal", &pricing.subtotal.display());
        let shipping = if pricing.is_free_shipping() {
            style(pricing.shipping_label()).green().to_string()
        } else {
            pricing.shipping_label()
        };
        self.kv("Shipping", &shipping);
        self.kv(&format!("Tax ({}%)", policy.tax_percent()), &pricing.tax.display());
        self.kv("Total", &style(pricing.grand_total.display()).bold().to_string());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Star rating as filled and empty stars.
pub fn stars(product: &Product) -> String {
    let filled = usize::from(product.filled_stars());
    let empty = (MAX_RATING as usize).saturating_sub(filled);
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Colored product badge.
pub fn badge(label: &str) -> String {
    match label {
        "NEW" => style(label).cyan().bold().to_string(),
        "BESTSELLER" => style(label).yellow().bold().to_string(),
        "SALE" => style(label).red().bold().to_string(),
        _ => label.to_string(),
    }
}

/// Price with the struck-through original when on sale.
pub fn price_tag(product: &Product) -> String {
    match product.original_price.filter(|_| product.is_on_sale()) {
        Some(original) => format!(
            "{} {}",
            product.price.display(),
            style(original.display()).dim().strikethrough()
        ),
        None => product.price.display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        let product = Product::new("9", "Bell", Money::from_cents(999), "tools").with_rating(3.7, 10);
        assert_eq!(stars(&product), "★★★☆☆");
    }

    #[test]
    fn test_price_tag_without_sale() {
        let product = Product::new("9", "Bell", Money::from_cents(999), "tools");
        assert_eq!(price_tag(&product), "$9.99");
    }
}

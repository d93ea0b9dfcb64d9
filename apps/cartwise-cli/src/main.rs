//! # Cartwise CLI
//!
//! Prices the sample store's cart and prints the report.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing (logs to stderr)                                 │
//! │  2. Load CliConfig from CARTWISE_* env vars                             │
//! │  3. Build the sample catalog and fill the cart                          │
//! │  4. apply_discounts → apply_coupon (each) → report                      │
//! │  5. Print the report to stdout as text or JSON                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod sample;

use anyhow::Context;
use cartwise_core::{Campaign, Cart, CartReport, Coupon};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, ReportFormat};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CliConfig::load().context("failed to load configuration")?;
    info!(
        cost_per_delivery_cents = config.cost_per_delivery_cents,
        cost_per_product_cents = config.cost_per_product_cents,
        format = ?config.report_format,
        "Configuration loaded"
    );

    let store = sample::build(config.delivery_calculator()).context("failed to fill sample cart")?;
    let cart = price(store.cart, &store.campaigns, &store.coupons);

    let report = CartReport::from(&cart);
    info!(
        total = %report.total_amount,
        discount = %report.total_discount,
        delivery = %report.delivery_cost,
        "Cart priced"
    );

    match config.report_format {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => println!("{}", report.to_json().context("failed to encode report")?),
    }

    Ok(())
}

/// Runs the campaign stage once, then every coupon in order.
fn price(mut cart: Cart, campaigns: &[Campaign], coupons: &[Coupon]) -> Cart {
    cart.apply_discounts(campaigns);
    for coupon in coupons {
        cart.apply_coupon(coupon);
    }
    cart
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cartwise_core=trace` - Show category tallies
/// - Default: INFO, with debug for the cartwise crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cartwise_core=debug,cartwise=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

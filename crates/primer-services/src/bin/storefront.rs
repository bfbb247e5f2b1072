//! # Storefront Demo
//!
//! Runs every facade operation once against the in-process collaborators
//! and logs the results.
//!
//! ## Usage
//! ```bash
//! # Defaults (open 08:00-20:00, prices in USD)
//! cargo run -p primer-services --bin storefront
//!
//! # Custom config file
//! cargo run -p primer-services --bin storefront -- --config ./primer.toml
//!
//! # More logging
//! RUST_LOG=debug cargo run -p primer-services --bin storefront
//! ```

use std::env;
use std::path::PathBuf;

use primer_core::{CreditCard, Order};
use primer_services::{fetch_data, local, FacadeConfig, ServiceFacade};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Primer Storefront Demo");
                println!();
                println!("Usage: storefront [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  TOML config file (default: built-in defaults)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    let config = FacadeConfig::load(config_path.as_deref())?;
    let facade = ServiceFacade::new(local::collaborators(), config)?;

    let hours = facade.config().hours;
    info!(
        open = hours.open,
        close = hours.close,
        base = %facade.config().currency.base,
        "Storefront configured"
    );

    let price = facade.get_price_in_currency(10.0, "AUD");
    info!(price, "Price in AUD");

    for destination in ["London", "Atlantis"] {
        info!(destination, info = %facade.get_shipping_info(destination), "Shipping");
    }

    let page = facade.render_page().await?;
    info!(page = %page, "Rendered home page");

    let outcome = facade
        .submit_order(&Order::new(100.0)?, &CreditCard::new("4111111111111111"))
        .await?;
    info!(outcome = %serde_json::to_string(&outcome)?, "Order submitted");

    let email = "name@domain.com";
    let signed_up = facade.sign_up(email).await?;
    info!(email, signed_up, "Sign-up");
    facade.login(email).await?;

    info!(online = facade.is_online(), "Business hours check");

    let data = fetch_data().await;
    info!(?data, "Fetched sample data");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=primer_services=trace` - Trace the facade only
/// - Default: INFO, DEBUG for primer crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,primer_services=debug,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! PhoneBill command line entry point
//!
//! Reads one call log and prints its total charge.
//!
//! Usage: `phonebill [PATH]`. Without a path, the configured `input.path`
//! (default `PhoneLog.csv`) is read.

use anyhow::{Context, Result};
use phonebill_core::{config::LoggingConfig, traits::BillCalculator, AppConfig, BillingError};
use phonebill_services::BillCalculatorImpl;
use std::env;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
///
/// Logs go to stderr so that stdout carries only the bill total.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "phonebill={},phonebill_core={},phonebill_services={}",
            logging.level, logging.level, logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    debug!(
        "Starting PhoneBill v{} (run mode {}) with {:?} reversed-call policy",
        env!("CARGO_PKG_VERSION"),
        AppConfig::run_mode(),
        config.billing.reversed_calls
    );

    let path = env::args().nth(1).unwrap_or_else(|| config.input.path.clone());
    let phone_log = fs::read_to_string(&path)
        .map_err(BillingError::from)
        .with_context(|| format!("Failed to read call log {}", path))?;
    info!("Read call log {} ({} bytes)", path, phone_log.len());

    let calculator = BillCalculatorImpl::from_config(&config.billing);
    let total = calculator
        .calculate(&phone_log)
        .with_context(|| format!("Failed to bill call log {}", path))?;

    println!("{}", total);
    Ok(())
}

//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::AppResult;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub billing: BillingConfig,
}

/// Call log input configuration
#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// Path of the call log read when no path is given on the command line
    #[serde(default = "default_input_path")]
    pub path: String,
}

fn default_input_path() -> String {
    "PhoneLog.csv".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Level applied to the phonebill crates when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// How a call whose end precedes its start is billed
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReversedCallPolicy {
    /// Fail the whole calculation with a domain invariant violation
    #[default]
    Reject,
    /// Bill the call as zero minutes
    Zero,
}

/// Billing-specific configuration
///
/// Tariff constants are fixed and intentionally absent here.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BillingConfig {
    #[serde(default)]
    pub reversed_calls: ReversedCallPolicy,
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Config` if a source is malformed or a value
    /// does not deserialize.
    pub fn load() -> AppResult<Self> {
        let run_mode = Self::run_mode();

        let config = Config::builder()
            // Start with default values
            .set_default("input.path", default_input_path())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .set_default("billing.reversed_calls", "reject")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with PHONEBILL_ prefix
            .add_source(
                Environment::with_prefix("PHONEBILL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Run mode selecting the `config/{RUN_MODE}` file
    pub fn run_mode() -> String {
        env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string())
    }
}

//! PhoneBill Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the PhoneBill calculator. It includes:
//!
//! - Domain models (CallRecord, Bill)
//! - The `BillCalculator` trait implemented by the services crate
//! - Unified error handling with stable error codes
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::{BillingError, ParseFailure};

/// Result type alias using BillingError
pub type AppResult<T> = Result<T, BillingError>;

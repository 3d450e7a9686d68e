//! Unified error handling for PhoneBill
//!
//! This module provides the error type covering every failure the bill
//! calculation and its entry point can report.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Reason a single call log line could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid phone number '{0}'")]
    InvalidNumber(String),

    #[error("invalid timestamp '{0}', expected DD-MM-YYYY HH:MM:SS")]
    InvalidTimestamp(String),
}

/// Main application error type
///
/// Every error raised by the calculator and the binary converts into this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    // ==================== Input Errors ====================
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: ParseFailure },

    #[error("Call to {number} ends before it starts: {start} > {end}")]
    DomainInvariantViolation {
        number: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl BillingError {
    /// Build a parse error for a 1-based line number
    pub fn parse(line: usize, reason: ParseFailure) -> Self {
        BillingError::Parse { line, reason }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BillingError::Parse { .. } => "parse_error",
            BillingError::DomainInvariantViolation { .. } => "domain_invariant_violation",
            BillingError::Config(_) => "config_error",
            BillingError::Io(_) => "io_error",
        }
    }

    /// Whether the error was caused by the content of the call log
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BillingError::Parse { .. } | BillingError::DomainInvariantViolation { .. }
        )
    }
}

// ==================== From implementations ====================

impl From<std::io::Error> for BillingError {
    fn from(err: std::io::Error) -> Self {
        BillingError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for BillingError {
    fn from(err: config::ConfigError) -> Self {
        BillingError::Config(err.to_string())
    }
}

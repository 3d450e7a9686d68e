//! Bill model
//!
//! The outcome of pricing one call log.

use rust_decimal::Decimal;

/// Bill for a single call log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    /// Total charge, never negative
    pub total: Decimal,

    /// Number exempted from charges for this log (None for an empty log)
    pub promotional_number: Option<i64>,

    /// Number of call records in the log
    pub call_count: usize,

    /// Number of calls to the promotional number
    pub free_call_count: usize,
}

impl Bill {
    /// Bill for a log with no calls
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            promotional_number: None,
            call_count: 0,
            free_call_count: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.call_count == 0
    }

    /// Number of calls that were priced
    pub fn charged_call_count(&self) -> usize {
        self.call_count - self.free_call_count
    }
}

impl Default for Bill {
    fn default() -> Self {
        Self::empty()
    }
}

//! Common traits for billing services
//!
//! Defines the abstraction the entry point calls into.

use crate::error::BillingError;
use crate::models::Bill;
use rust_decimal::Decimal;

/// Telephone bill calculator
///
/// Implementations must be pure functions of the log text: two calls with
/// the same input return the same result, and no run-scoped state (such as
/// the promotional number) outlives a single call.
pub trait BillCalculator: Send + Sync {
    /// Compute the full bill for a call log
    fn bill(&self, phone_log: &str) -> Result<Bill, BillingError>;

    /// Compute the total charge for a call log
    fn calculate(&self, phone_log: &str) -> Result<Decimal, BillingError> {
        self.bill(phone_log).map(|bill| bill.total)
    }
}

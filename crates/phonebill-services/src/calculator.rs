//! Bill calculator
//!
//! Orchestrates parsing, promotional number selection and pricing for one
//! call log.

use phonebill_core::{
    config::{BillingConfig, ReversedCallPolicy},
    models::{Bill, CallRecord},
    traits::BillCalculator,
    AppResult, BillingError,
};
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument, warn};

use crate::{parser::parse_log, pricing::price_call, promotion::select_promotional_number};

/// Bill calculator implementation
///
/// Holds only immutable configuration. Everything derived from a log,
/// including the promotional number, lives on the stack of a single
/// `bill` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillCalculatorImpl {
    reversed_calls: ReversedCallPolicy,
}

impl BillCalculatorImpl {
    /// Create a new calculator
    pub fn new(reversed_calls: ReversedCallPolicy) -> Self {
        Self { reversed_calls }
    }

    /// Create a calculator from the billing configuration section
    pub fn from_config(config: &BillingConfig) -> Self {
        Self::new(config.reversed_calls)
    }

    pub fn reversed_calls(&self) -> ReversedCallPolicy {
        self.reversed_calls
    }

    /// Apply the reversed-call policy to one record
    fn check_record(&self, record: &CallRecord) -> AppResult<()> {
        if !record.is_reversed() {
            return Ok(());
        }

        match self.reversed_calls {
            ReversedCallPolicy::Reject => {
                error!(
                    "Call to {} ends before it starts ({} > {})",
                    record.number, record.start, record.end
                );
                Err(BillingError::DomainInvariantViolation {
                    number: record.number,
                    start: record.start,
                    end: record.end,
                })
            }
            ReversedCallPolicy::Zero => {
                warn!(
                    "Call to {} ends before it starts, billing as zero minutes",
                    record.number
                );
                Ok(())
            }
        }
    }
}

impl BillCalculator for BillCalculatorImpl {
    #[instrument(skip(self, phone_log), fields(bytes = phone_log.len()))]
    fn bill(&self, phone_log: &str) -> AppResult<Bill> {
        let records = parse_log(phone_log)?;

        if records.is_empty() {
            debug!("Empty call log, returning zero bill");
            return Ok(Bill::empty());
        }

        for record in &records {
            self.check_record(record)?;
        }

        let promotional_number = select_promotional_number(&records);

        let mut total = Decimal::ZERO;
        let mut free_call_count = 0;
        for record in &records {
            if promotional_number == Some(record.number) {
                free_call_count += 1;
            }
            total += price_call(record, promotional_number);
        }

        info!(
            "Billed {} calls ({} free to {:?}): total {}",
            records.len(),
            free_call_count,
            promotional_number,
            total
        );

        Ok(Bill {
            total,
            promotional_number,
            call_count: records.len(),
            free_call_count,
        })
    }
}

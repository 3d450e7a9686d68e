//! Call pricing
//!
//! Prices a single call against the fixed tariff. The first five started
//! minutes are charged one by one at the peak or off-peak rate, depending
//! on the time of day each minute starts; every further minute is charged
//! the flat long-call rate.

use chrono::{Duration, NaiveTime, Timelike};
use phonebill_core::models::CallRecord;
use rust_decimal::Decimal;
use tracing::debug;

use crate::constants::{
    LONG_CALL_RATE, LONG_CALL_THRESHOLD_MINUTES, OFF_PEAK_RATE, PEAK_END_SECS, PEAK_RATE,
    PEAK_START_SECS,
};

/// Tariff period a minute falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatePeriod {
    Peak,
    OffPeak,
}

impl RatePeriod {
    /// Period for a minute starting at `time`
    ///
    /// Peak is strictly between 08:00:00 and 16:00:00; both bounds are
    /// off-peak. Log timestamps have whole-second precision.
    pub fn at(time: NaiveTime) -> Self {
        let secs = time.num_seconds_from_midnight();
        if secs > PEAK_START_SECS && secs < PEAK_END_SECS {
            RatePeriod::Peak
        } else {
            RatePeriod::OffPeak
        }
    }

    /// Rate per started minute
    #[inline]
    pub fn rate(self) -> Decimal {
        match self {
            RatePeriod::Peak => PEAK_RATE,
            RatePeriod::OffPeak => OFF_PEAK_RATE,
        }
    }
}

/// Price one call
///
/// Calls to `promotional_number` are free. Zero-length and reversed calls
/// have no billable minutes and cost nothing.
pub fn price_call(record: &CallRecord, promotional_number: Option<i64>) -> Decimal {
    if promotional_number == Some(record.number) {
        debug!("Call to promotional number {} is free", record.number);
        return Decimal::ZERO;
    }

    let total_minutes = record.billable_minutes();
    let base_minutes = total_minutes.min(LONG_CALL_THRESHOLD_MINUTES);
    let long_call_minutes = (total_minutes - LONG_CALL_THRESHOLD_MINUTES).max(0);

    // NaiveTime addition wraps past midnight
    let start = record.start_time_of_day();
    let base_cost: Decimal = (0..base_minutes)
        .map(|minute| RatePeriod::at(start + Duration::minutes(minute)).rate())
        .sum();
    let cost = base_cost + LONG_CALL_RATE * Decimal::from(long_call_minutes);

    debug!(
        "Priced call to {}: {} min ({} time-of-day, {} long-call) = {}",
        record.number, total_minutes, base_minutes, long_call_minutes, cost
    );

    cost
}

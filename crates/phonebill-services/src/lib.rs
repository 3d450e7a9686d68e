//! Business logic services for PhoneBill
//!
//! This crate turns a textual call log into a bill.
//!
//! # Architecture
//!
//! The calculation is a synchronous pipeline with no shared state:
//! - `parser` turns log text into ordered `CallRecord`s
//! - `promotion` picks the number that is free for this log
//! - `pricing` prices one call against the fixed tariff
//! - `calculator` wires the stages together behind `BillCalculator`
//!
//! The promotional number is passed from the selector to the pricing
//! engine as a plain value, so one `BillCalculatorImpl` can be shared
//! across threads.

pub mod calculator;
pub mod parser;
pub mod pricing;
pub mod promotion;

pub use calculator::BillCalculatorImpl;
pub use parser::parse_log;
pub use pricing::{price_call, RatePeriod};
pub use promotion::select_promotional_number;

/// Tariff constants
pub mod constants {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Rate per started minute inside the peak window
    pub const PEAK_RATE: Decimal = dec!(1.00);

    /// Rate per started minute outside the peak window
    pub const OFF_PEAK_RATE: Decimal = dec!(0.50);

    /// Rate per started minute beyond the long-call threshold
    pub const LONG_CALL_RATE: Decimal = dec!(0.20);

    /// Minutes priced by time of day before the long-call rate applies
    pub const LONG_CALL_THRESHOLD_MINUTES: i64 = 5;

    /// Peak window start, seconds from midnight (08:00:00, exclusive)
    pub const PEAK_START_SECS: u32 = 8 * 3600;

    /// Peak window end, seconds from midnight (16:00:00, exclusive)
    pub const PEAK_END_SECS: u32 = 16 * 3600;
}

//! Domain models for PhoneBill
//!
//! This module contains the core domain models shared by the parser,
//! the pricing engine and the calculator.

pub mod bill;
pub mod call_record;

pub use bill::Bill;
pub use call_record::CallRecord;

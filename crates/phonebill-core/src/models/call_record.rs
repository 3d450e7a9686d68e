//! Call record model
//!
//! Represents one parsed line of a call log.

use chrono::{NaiveDateTime, NaiveTime};

/// Seconds in a billed minute
const SECONDS_PER_MINUTE: i64 = 60;

/// Call record
///
/// A call to `number` lasting from `start` to `end`. Timestamps carry no
/// time zone; they are read exactly as written in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRecord {
    /// Called number, compared arithmetically
    pub number: i64,

    /// Call start timestamp
    pub start: NaiveDateTime,

    /// Call end timestamp
    pub end: NaiveDateTime,
}

impl CallRecord {
    pub fn new(number: i64, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { number, start, end }
    }

    /// Signed call duration in whole seconds (`end - start`)
    #[inline]
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Check if the call ends before it starts
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Number of started minutes
    ///
    /// Any partial minute counts as a full one. Zero-length and reversed
    /// calls have no billable minutes.
    pub fn billable_minutes(&self) -> i64 {
        let seconds = self.duration_seconds();
        if seconds <= 0 {
            return 0;
        }
        (seconds + SECONDS_PER_MINUTE - 1) / SECONDS_PER_MINUTE
    }

    /// Wall-clock time of day at which the call starts
    #[inline]
    pub fn start_time_of_day(&self) -> NaiveTime {
        self.start.time()
    }
}

//! Call log parser
//!
//! Each non-empty line of a log describes one call:
//!
//! ```text
//! <number> <DD-MM-YYYY> <HH:MM:SS> <DD-MM-YYYY> <HH:MM:SS>
//! ```
//!
//! Parsing stops at the first malformed line; a log is either read in full
//! or rejected.

use chrono::{NaiveDateTime, Timelike};
use phonebill_core::{models::CallRecord, AppResult, BillingError, ParseFailure};
use tracing::{debug, instrument, warn};

/// chrono pattern for `DD-MM-YYYY HH:MM:SS`
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Fixed-width layouts of the date and time fields
const DATE_SHAPE: &str = "99-99-9999";
const TIME_SHAPE: &str = "99:99:99";

/// Fields on every call line
const FIELDS_PER_LINE: usize = 5;

/// Parse a whole call log, preserving line order
///
/// Carriage returns are stripped before splitting on `\n`; blank lines are
/// skipped. An empty log yields an empty vector.
///
/// # Errors
///
/// Returns `BillingError::Parse` for the first malformed line, carrying its
/// 1-based line number.
#[instrument(skip(phone_log), fields(bytes = phone_log.len()))]
pub fn parse_log(phone_log: &str) -> AppResult<Vec<CallRecord>> {
    let normalized = phone_log.replace('\r', "");
    let mut records = Vec::new();

    for (index, line) in normalized.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_line(index + 1, line).map_err(|e| {
            warn!("Rejecting call log: {}", e);
            e
        })?;
        records.push(record);
    }

    debug!("Parsed {} call records", records.len());
    Ok(records)
}

/// Parse a single call line
pub fn parse_line(line_number: usize, line: &str) -> AppResult<CallRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(BillingError::parse(
            line_number,
            ParseFailure::FieldCount {
                found: fields.len(),
            },
        ));
    }

    let number = fields[0].parse::<i64>().map_err(|_| {
        BillingError::parse(line_number, ParseFailure::InvalidNumber(fields[0].to_string()))
    })?;
    let start = parse_timestamp(line_number, fields[1], fields[2])?;
    let end = parse_timestamp(line_number, fields[3], fields[4])?;

    Ok(CallRecord::new(number, start, end))
}

fn parse_timestamp(line_number: usize, date: &str, time: &str) -> AppResult<NaiveDateTime> {
    let raw = format!("{} {}", date, time);

    // chrono accepts 1-digit fields, signed years and leap seconds; the log
    // format allows none of them
    if !matches_shape(date, DATE_SHAPE) || !matches_shape(time, TIME_SHAPE) {
        return Err(BillingError::parse(
            line_number,
            ParseFailure::InvalidTimestamp(raw),
        ));
    }

    match NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT) {
        Ok(timestamp) if timestamp.nanosecond() < 1_000_000_000 => Ok(timestamp),
        _ => Err(BillingError::parse(
            line_number,
            ParseFailure::InvalidTimestamp(raw),
        )),
    }
}

/// Check `value` against a shape where `9` stands for any ASCII digit
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'9' => v.is_ascii_digit(),
            _ => v == s,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_parse_single_line() {
        let records = parse_log("420774577453 13-01-2020 18:10:15 13-01-2020 18:12:57").unwrap();
        assert_eq!(
            records,
            vec![CallRecord::new(
                420774577453,
                at(13, 18, 10, 15),
                at(13, 18, 12, 57)
            )]
        );
    }

    #[test]
    fn test_parse_preserves_order_and_strips_carriage_returns() {
        let log = "420776562353 18-01-2020 08:59:20 18-01-2020 09:10:00\r\n\
                   420774577453 13-01-2020 18:10:15 13-01-2020 18:12:57\r\n";
        let records = parse_log(log).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number, 420776562353);
        assert_eq!(records[1].number, 420774577453);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let log = "\n100 01-01-2020 10:00:00 01-01-2020 10:01:00\n   \n\n";
        let records = parse_log(log).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_empty_log() {
        assert!(parse_log("").unwrap().is_empty());
        assert!(parse_log("\r\n\r\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tolerates_repeated_whitespace() {
        let record = parse_line(1, "100  01-01-2020\t10:00:00 01-01-2020 10:01:00").unwrap();
        assert_eq!(record.number, 100);
        assert_eq!(record.end, at(1, 10, 1, 0));
    }

    #[test]
    fn test_missing_field() {
        let err = parse_log("100 01-01-2020 10:00:00 01-01-2020").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(1, ParseFailure::FieldCount { found: 4 })
        );
    }

    #[test]
    fn test_extra_field() {
        let err = parse_line(7, "100 01-01-2020 10:00:00 01-01-2020 10:01:00 x").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(7, ParseFailure::FieldCount { found: 6 })
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_line(1, "+42O 01-01-2020 10:00:00 01-01-2020 10:01:00").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(1, ParseFailure::InvalidNumber("+42O".to_string()))
        );

        // Larger than i64
        assert!(parse_line(1, "99999999999999999999 01-01-2020 10:00:00 01-01-2020 10:01:00").is_err());
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = parse_line(1, "100 2020-01-01 10:00:00 01-01-2020 10:01:00").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(
                1,
                ParseFailure::InvalidTimestamp("2020-01-01 10:00:00".to_string())
            )
        );

        assert!(parse_line(1, "100 32-01-2020 10:00:00 01-01-2020 10:01:00").is_err());
        assert!(parse_line(1, "100 01-01-2020 10:00:00 01-01-2020 24:01:00").is_err());
    }

    #[test]
    fn test_timestamp_requires_fixed_width_fields() {
        let err = parse_log("100 1-1-2020 8:00:00 1-1-2020 8:01:00").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(1, ParseFailure::InvalidTimestamp("1-1-2020 8:00:00".to_string()))
        );

        assert!(parse_line(1, "100 01-01-2020 8:00:00 01-01-2020 08:01:00").is_err());
        assert!(parse_line(1, "100 01-1-2020 08:00:00 01-01-2020 08:01:00").is_err());
        assert!(parse_line(1, "100 01-01-20200 08:00:00 01-01-2020 08:01:00").is_err());
        assert!(parse_line(1, "100 01/01/2020 08:00:00 01-01-2020 08:01:00").is_err());
    }

    #[test]
    fn test_timestamp_rejects_signed_year() {
        let err = parse_log("100 01-01-+2020 10:00:00 01-01-+2020 10:01:00").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(
                1,
                ParseFailure::InvalidTimestamp("01-01-+2020 10:00:00".to_string())
            )
        );
    }

    #[test]
    fn test_timestamp_rejects_leap_second() {
        let err = parse_log("100 01-01-2020 09:59:00 01-01-2020 10:00:60").unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(
                1,
                ParseFailure::InvalidTimestamp("01-01-2020 10:00:60".to_string())
            )
        );

        // Last regular second still parses
        let record = parse_line(1, "100 01-01-2020 09:59:00 01-01-2020 10:00:59").unwrap();
        assert_eq!(record.end, at(1, 10, 0, 59));
    }

    #[test]
    fn test_error_reports_physical_line_number() {
        let log = "100 01-01-2020 10:00:00 01-01-2020 10:01:00\n\nbroken line\n";
        let err = parse_log(log).unwrap_err();
        assert_eq!(
            err,
            BillingError::parse(3, ParseFailure::FieldCount { found: 2 })
        );
    }
}

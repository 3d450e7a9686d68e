//! Promotional number selection
//!
//! Calls to the most frequently called number in a log are free. When
//! several numbers share the highest call count, the arithmetically
//! largest one wins.

use phonebill_core::models::CallRecord;
use std::collections::HashMap;
use tracing::debug;

/// Select the number exempted from charges for this log
///
/// Every record counts as one call regardless of its duration. Returns
/// `None` for an empty slice.
pub fn select_promotional_number(records: &[CallRecord]) -> Option<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.number).or_insert(0) += 1;
    }

    let selected = counts
        .into_iter()
        .max_by_key(|&(number, count)| (count, number));

    if let Some((number, count)) = selected {
        debug!("Promotional number {} with {} calls", number, count);
    }

    selected.map(|(number, _)| number)
}

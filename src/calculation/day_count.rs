//! Inclusive day counting for trip periods.

use chrono::NaiveDate;

/// Date format accepted for trip periods.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).ok()
}

/// Counts the days between two ISO dates, both ends included.
///
/// A missing or unparsable date, or an end before the start, yields 0.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::inclusive_day_count;
///
/// assert_eq!(inclusive_day_count("2025-09-10", "2025-09-10"), 1);
/// assert_eq!(inclusive_day_count("2025-09-10", "2025-09-11"), 2);
/// assert_eq!(inclusive_day_count("2025-09-11", "2025-09-10"), 0);
/// assert_eq!(inclusive_day_count("", "2025-09-10"), 0);
/// assert_eq!(inclusive_day_count("2025-02-30", "2025-03-01"), 0);
/// ```
pub fn inclusive_day_count(start: &str, end: &str) -> i64 {
    match (parse_iso_date(start), parse_iso_date(end)) {
        (Some(start), Some(end)) => inclusive_day_count_between(start, end),
        _ => 0,
    }
}

/// Counts the days between two dates, both ends included; 0 if reversed.
pub fn inclusive_day_count_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }
    (end - start).num_days() + 1
}

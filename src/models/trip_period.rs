//! Trip period model.
//!
//! Dates are kept as entered so that a half-filled or malformed period can
//! still be carried around; the day count treats such periods as empty.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::calculation::inclusive_day_count;

/// The start and end of a trip, as ISO `YYYY-MM-DD` strings.
///
/// # Example
///
/// ```
/// use trip_expense::models::TripPeriod;
///
/// let period = TripPeriod::new("2025-09-10", "2025-09-12");
/// assert_eq!(period.day_count(), 3);
/// assert_eq!(period.label(), "2025-09-10~2025-09-12 (3일)");
///
/// assert_eq!(TripPeriod::default().day_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TripPeriod {
    /// The first day of the trip (inclusive).
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: String,
    /// The last day of the trip (inclusive).
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date: String,
}

impl TripPeriod {
    /// Creates a new trip period.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Returns the inclusive day count, or 0 for a missing or reversed period.
    pub fn day_count(&self) -> i64 {
        inclusive_day_count(&self.start_date, &self.end_date)
    }

    /// Returns the label used in saved rows, e.g. `2025-09-10~2025-09-11 (2일)`.
    pub fn label(&self) -> String {
        self.label_with_days(self.day_count())
    }

    /// Formats the label with an already computed day count.
    ///
    /// Dates are trimmed the same way the day count trims them.
    pub fn label_with_days(&self, day_count: i64) -> String {
        format!(
            "{}~{} ({}일)",
            self.start_date.trim(),
            self.end_date.trim(),
            day_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_period() {
        let period = TripPeriod::new("2025-09-10", "2025-09-10");
        assert_eq!(period.day_count(), 1);
        assert_eq!(period.label(), "2025-09-10~2025-09-10 (1일)");
    }

    #[test]
    fn test_label_trims_padded_dates() {
        let period = TripPeriod::new(" 2025-09-10 ", "2025-09-11\t");
        assert_eq!(period.day_count(), 2);
        assert_eq!(period.label(), "2025-09-10~2025-09-11 (2일)");
    }

    #[test]
    fn test_reversed_period_has_no_days() {
        let period = TripPeriod::new("2025-09-12", "2025-09-10");
        assert_eq!(period.day_count(), 0);
    }

    #[test]
    fn test_half_filled_period_has_no_days() {
        let period = TripPeriod::new("2025-09-10", "");
        assert_eq!(period.day_count(), 0);
    }

    #[test]
    fn test_deserializes_with_missing_end() {
        let period: TripPeriod = serde_json::from_str(r#"{"start_date": "2025-09-10"}"#).unwrap();
        assert_eq!(period, TripPeriod::new("2025-09-10", ""));
    }
}

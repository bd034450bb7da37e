//! Per-diem under the training-travel policy modes.
//!
//! Ordinary travel pays the daily rate for every day. Training travel
//! pays the first and last day in full and treats the days in between
//! according to [`TrainingMode`]: nothing when boarding at the venue, half
//! the rate when commuting.

use crate::models::TrainingMode;

use super::half_rate;

/// Computes the per-diem payable for `days` days under `mode`.
///
/// | mode      | 1 day | 2 days | n > 2 days                      |
/// |-----------|-------|--------|---------------------------------|
/// | `None`    | p     | 2p     | n·p                             |
/// | `Dorm`    | p     | 2p     | 2p                              |
/// | `Commute` | p     | 2p     | 2p + (n − 2)·round_half_even(p/2) |
///
/// Zero or negative `days` pay nothing.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::per_diem_for_mode;
/// use trip_expense::models::TrainingMode;
///
/// assert_eq!(per_diem_for_mode(TrainingMode::None, 3, 25_000), 75_000);
/// assert_eq!(per_diem_for_mode(TrainingMode::Dorm, 3, 25_000), 50_000);
/// assert_eq!(per_diem_for_mode(TrainingMode::Commute, 3, 25_000), 62_500);
/// assert_eq!(per_diem_for_mode(TrainingMode::Commute, 0, 25_000), 0);
/// ```
pub fn per_diem_for_mode(mode: TrainingMode, days: i64, daily_rate: i64) -> i64 {
    if days <= 0 {
        return 0;
    }

    let full_days = days.min(2);
    let ends = full_days.saturating_mul(daily_rate);

    match mode {
        TrainingMode::None => days.saturating_mul(daily_rate),
        TrainingMode::Dorm => ends,
        TrainingMode::Commute => {
            let middle_days = days - full_days;
            ends.saturating_add(middle_days.saturating_mul(half_rate(daily_rate)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: i64 = 25_000;

    #[test]
    fn test_none_pays_every_day() {
        for days in 0..10 {
            assert_eq!(per_diem_for_mode(TrainingMode::None, days, RATE), days * RATE);
        }
    }

    #[test]
    fn test_dorm_one_day() {
        assert_eq!(per_diem_for_mode(TrainingMode::Dorm, 1, RATE), RATE);
    }

    #[test]
    fn test_dorm_caps_at_two_days() {
        for days in 2..30 {
            assert_eq!(per_diem_for_mode(TrainingMode::Dorm, days, RATE), 2 * RATE);
        }
    }

    #[test]
    fn test_commute_short_trips() {
        assert_eq!(per_diem_for_mode(TrainingMode::Commute, 1, RATE), RATE);
        assert_eq!(per_diem_for_mode(TrainingMode::Commute, 2, RATE), 2 * RATE);
    }

    #[test]
    fn test_commute_three_days() {
        assert_eq!(
            per_diem_for_mode(TrainingMode::Commute, 3, RATE),
            2 * 25_000 + 12_500
        );
    }

    #[test]
    fn test_commute_five_days_with_odd_rate() {
        // half of 25_001 rounds to 12_500 (tie to even)
        assert_eq!(
            per_diem_for_mode(TrainingMode::Commute, 5, 25_001),
            2 * 25_001 + 3 * 12_500
        );
    }

    #[test]
    fn test_non_positive_days_pay_nothing() {
        for mode in TrainingMode::ALL {
            assert_eq!(per_diem_for_mode(mode, 0, RATE), 0);
            assert_eq!(per_diem_for_mode(mode, -4, RATE), 0);
        }
    }

    #[test]
    fn test_zero_rate() {
        for mode in TrainingMode::ALL {
            assert_eq!(per_diem_for_mode(mode, 5, 0), 0);
        }
    }
}

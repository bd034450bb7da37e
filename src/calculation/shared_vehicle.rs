//! Shared-vehicle deduction.
//!
//! Each day on which an employer-provided vehicle was used reduces the
//! per-diem by half the daily rate. Only days inside the trip count.

use super::half_rate;

/// Computes the shared-vehicle deduction.
///
/// `shared_days` is clamped into `0..=total_days` before multiplying by
/// half the daily rate.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::shared_vehicle_deduction;
///
/// assert_eq!(shared_vehicle_deduction(2, 25_000, 3), 25_000);
/// assert_eq!(shared_vehicle_deduction(5, 25_000, 3), 37_500);
/// assert_eq!(shared_vehicle_deduction(-1, 25_000, 3), 0);
/// ```
pub fn shared_vehicle_deduction(shared_days: i64, daily_rate: i64, total_days: i64) -> i64 {
    let used_days = shared_days.clamp(0, total_days.max(0));
    half_rate(daily_rate).saturating_mul(used_days)
}

//! Meal-provision deduction.
//!
//! Meals provided in kind are deducted from the meal allowance in blocks
//! of three: each full block removes one day's meal rate, and each meal
//! left over removes the single-meal rate.

/// Number of provided meals that make up one day's meal allowance.
pub const MEALS_PER_DAY: i64 = 3;

/// Computes the deduction for `meal_count` provided meals.
///
/// A negative count is treated as 0.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::meal_deduction;
///
/// // one block of three plus two single meals
/// assert_eq!(meal_deduction(5, 25_000, 8_330), 25_000 + 16_660);
/// assert_eq!(meal_deduction(0, 25_000, 8_330), 0);
/// ```
pub fn meal_deduction(meal_count: i64, meal_rate_per_day: i64, meal_unit_rate: i64) -> i64 {
    let meals = meal_count.max(0);
    let blocks = meals / MEALS_PER_DAY;
    let remainder = meals % MEALS_PER_DAY;
    blocks
        .saturating_mul(meal_rate_per_day)
        .saturating_add(remainder.saturating_mul(meal_unit_rate))
}

//! Per-trip inputs and the rate schedule they are priced with.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{Leg, Lodging, TrainingMode, TripPeriod};
use crate::error::{EngineError, EngineResult};

/// Default per-diem paid for one day of travel.
pub const DEFAULT_DAILY_RATE: i64 = 25_000;

/// Default meal allowance for one day of travel.
pub const DEFAULT_MEAL_RATE_PER_DAY: i64 = 25_000;

/// Default deduction for a single provided meal.
pub const DEFAULT_MEAL_UNIT_RATE: i64 = 8_330;

/// The rates a trip is priced with.
///
/// Rates are session settings: they survive a save, unlike [`TripInputs`].
///
/// # Example
///
/// ```
/// use trip_expense::models::ExpenseRates;
///
/// let rates = ExpenseRates::default();
/// assert_eq!(rates.daily_rate, 25_000);
/// assert_eq!(rates.meal_unit_rate, 8_330);
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRates {
    /// Per-diem for one full day.
    pub daily_rate: i64,
    /// Meal allowance for one day (three meals).
    pub meal_rate_per_day: i64,
    /// Deduction for one provided meal outside a block of three.
    pub meal_unit_rate: i64,
}

impl Default for ExpenseRates {
    fn default() -> Self {
        Self {
            daily_rate: DEFAULT_DAILY_RATE,
            meal_rate_per_day: DEFAULT_MEAL_RATE_PER_DAY,
            meal_unit_rate: DEFAULT_MEAL_UNIT_RATE,
        }
    }
}

impl ExpenseRates {
    /// Checks that no rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("daily_rate", self.daily_rate),
            ("meal_rate_per_day", self.meal_rate_per_day),
            ("meal_unit_rate", self.meal_unit_rate),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// Everything entered for one trip.
///
/// Every field defaults, so a partially filled form still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TripInputs {
    /// The trip dates.
    #[serde(default)]
    pub period: TripPeriod,
    /// The per-diem policy mode.
    #[serde(default)]
    pub mode: TrainingMode,
    /// Days on which an employer-provided vehicle was used.
    #[serde(default, deserialize_with = "lenient::non_negative_amount")]
    pub shared_vehicle_days: i64,
    /// Total number of meals provided in kind.
    #[serde(default, deserialize_with = "lenient::non_negative_amount")]
    pub meals_provided: i64,
    /// Journeys taken.
    #[serde(default)]
    pub legs: Vec<Leg>,
    /// Lodging paid at actual cost.
    #[serde(default)]
    pub lodgings: Vec<Lodging>,
}

//! Calculation logic for the trip expense engine.
//!
//! This module contains the numeric coercion and currency formatting helpers,
//! inclusive day counting, the per-diem training mode rules, the
//! shared-vehicle and meal deductions, transport and lodging totals, and
//! the aggregation that combines them into an expense summary.

mod aggregation;
mod coercion;
mod day_count;
mod meal_deduction;
mod per_diem;
mod shared_vehicle;
mod transport;

pub use aggregation::{WARNING_INVALID_PERIOD, WARNING_UNMATCHED_ROUTE, calculate_expenses};
pub use coercion::{
    CURRENCY_SUFFIX, coerce_amount, format_won, format_won_value, half_rate, round_half_even,
    truncate_amount,
};
pub(crate) use coercion::parse_decimal;
pub use day_count::{
    ISO_DATE_FORMAT, inclusive_day_count, inclusive_day_count_between, parse_iso_date,
};
pub use meal_deduction::{MEALS_PER_DAY, meal_deduction};
pub use per_diem::per_diem_for_mode;
pub use shared_vehicle::shared_vehicle_deduction;
pub use transport::{lodging_total, route_cost_map, transport_total};

//! Request types for the trip expense API.

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRates, Route, TripInputs};

/// Request body for the `/calculate` endpoint.
///
/// Only `trip` is needed; the route table and rates fall back to the
/// server configuration when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The trip to calculate.
    #[serde(default)]
    pub trip: TripInputs,
    /// Route table to price legs against, replacing the configured one.
    #[serde(default)]
    pub routes: Option<Vec<Route>>,
    /// Per-field rate overrides.
    #[serde(default)]
    pub rates: RateOverrides,
}

/// Optional replacements for individual rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateOverrides {
    /// Replaces the daily per-diem rate.
    #[serde(default)]
    pub daily_rate: Option<i64>,
    /// Replaces the daily meal rate.
    #[serde(default)]
    pub meal_rate_per_day: Option<i64>,
    /// Replaces the single-meal deduction rate.
    #[serde(default)]
    pub meal_unit_rate: Option<i64>,
}

impl RateOverrides {
    /// Applies the overrides on top of `base`.
    pub fn apply(&self, base: ExpenseRates) -> ExpenseRates {
        ExpenseRates {
            daily_rate: self.daily_rate.unwrap_or(base.daily_rate),
            meal_rate_per_day: self.meal_rate_per_day.unwrap_or(base.meal_rate_per_day),
            meal_unit_rate: self.meal_unit_rate.unwrap_or(base.meal_unit_rate),
        }
    }
}

/// Response body of the route import endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Number of routes now in the table.
    pub imported: usize,
}

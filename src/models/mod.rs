//! Core data models for the trip expense engine.
//!
//! This module contains all the domain models used throughout the engine.

mod expense_summary;
mod lenient;
mod route;
mod saved_row;
mod training_mode;
mod trip_inputs;
mod trip_period;

pub use expense_summary::{
    AuditStep, AuditTrace, AuditWarning, ExpenseSummary, ExpenseTotals, MealBreakdown,
    PerDiemBreakdown,
};
pub use route::{Leg, Lodging, Route};
pub use saved_row::{SAVED_ROW_HEADER, SavedRow};
pub use training_mode::{TrainingMode, UnknownTrainingMode};
pub use trip_inputs::{
    DEFAULT_DAILY_RATE, DEFAULT_MEAL_RATE_PER_DAY, DEFAULT_MEAL_UNIT_RATE, ExpenseRates,
    TripInputs,
};
pub use trip_period::TripPeriod;

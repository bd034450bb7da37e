//! Calculation result models for the trip expense engine.
//!
//! This module contains the [`ExpenseSummary`] produced by
//! [`calculate_expenses`](crate::calculation::calculate_expenses), with its
//! per-diem and meal breakdowns, totals, and an audit trace of every step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SavedRow, TrainingMode, TripPeriod};

/// Per-diem figures, from gross to net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemBreakdown {
    /// Day count times the daily rate, before any policy rule.
    pub base: i64,
    /// Per-diem after the training mode rule.
    pub after_training: i64,
    /// Reduction caused by the training mode rule.
    pub training_deduction: i64,
    /// Reduction for days on a shared vehicle.
    pub shared_vehicle_deduction: i64,
    /// Per-diem payable.
    pub net: i64,
}

/// Meal allowance figures, from gross to net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealBreakdown {
    /// Day count times the daily meal rate.
    pub gross: i64,
    /// Reduction for meals provided in kind.
    pub deduction: i64,
    /// Meal allowance payable.
    pub net: i64,
}

/// Aggregated totals for a trip.
///
/// `grand_total` is always exactly the sum of transport, lodging, per-diem
/// net and meal net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseTotals {
    /// Sum of fares over all legs.
    pub transport_total: i64,
    /// Sum of lodging amounts.
    pub lodging_total: i64,
    /// Training, shared-vehicle and meal deductions combined.
    pub total_deduction: i64,
    /// The amount expected to be paid.
    pub grand_total: i64,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// An advisory raised during calculation.
///
/// Advisories never stop a calculation; the affected value is simply zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use trip_expense::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a trip expense calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The trip period calculated.
    pub period: TripPeriod,
    /// Inclusive day count of the period.
    pub day_count: i64,
    /// The per-diem policy mode applied.
    pub mode: TrainingMode,
    /// Per-diem breakdown.
    pub per_diem: PerDiemBreakdown,
    /// Meal allowance breakdown.
    pub meals: MealBreakdown,
    /// Aggregated totals.
    pub totals: ExpenseTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl ExpenseSummary {
    /// Returns the period label, e.g. `2025-09-10~2025-09-11 (2일)`.
    pub fn period_label(&self) -> String {
        self.period.label_with_days(self.day_count)
    }

    /// Freezes this summary into a saved row with the given sequence number.
    pub fn to_saved_row(&self, sequence_number: u32) -> SavedRow {
        SavedRow {
            sequence_number,
            period_label: self.period_label(),
            per_diem_net: self.per_diem.net,
            meal_net: self.meals.net,
            transport_total: self.totals.transport_total,
            lodging_total: self.totals.lodging_total,
            total_deduction: self.totals.total_deduction,
            grand_total: self.totals.grand_total,
        }
    }
}

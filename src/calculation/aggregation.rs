//! Trip expense aggregation.
//!
//! Combines the day count, per-diem rules, deductions, and transport and
//! lodging totals into one [`ExpenseSummary`], recording every rule
//! applied in the audit trace.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, ExpenseRates, ExpenseSummary, ExpenseTotals,
    MealBreakdown, PerDiemBreakdown, Route, TrainingMode, TripInputs,
};

use super::{
    format_won, lodging_total, meal_deduction, per_diem_for_mode, route_cost_map,
    shared_vehicle_deduction, transport_total,
};

/// Warning code raised when the period yields no billable days.
pub const WARNING_INVALID_PERIOD: &str = "INVALID_PERIOD";

/// Warning code raised for a leg whose route is not in the route table.
pub const WARNING_UNMATCHED_ROUTE: &str = "UNMATCHED_ROUTE";

struct AuditLog {
    steps: Vec<AuditStep>,
}

impl AuditLog {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }
}

/// Calculates all expense figures for one trip.
///
/// This never fails: malformed periods produce a zero day count, unknown
/// routes cost nothing, and each such case adds a warning to the audit
/// trace instead.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::calculate_expenses;
/// use trip_expense::models::{ExpenseRates, Leg, Route, TrainingMode, TripInputs, TripPeriod};
///
/// let routes = vec![Route::new("광주-서울", 45_000), Route::new("서울-광주", 45_000)];
/// let inputs = TripInputs {
///     period: TripPeriod::new("2025-09-10", "2025-09-12"),
///     mode: TrainingMode::Commute,
///     legs: vec![Leg::new("광주-서울", 1), Leg::new("서울-광주", 1)],
///     ..TripInputs::default()
/// };
///
/// let summary = calculate_expenses(&inputs, &routes, &ExpenseRates::default());
///
/// assert_eq!(summary.day_count, 3);
/// assert_eq!(summary.per_diem.net, 62_500);
/// assert_eq!(summary.meals.net, 75_000);
/// assert_eq!(summary.totals.transport_total, 90_000);
/// assert_eq!(summary.totals.total_deduction, 12_500);
/// assert_eq!(summary.totals.grand_total, 90_000 + 62_500 + 75_000);
/// ```
pub fn calculate_expenses(
    inputs: &TripInputs,
    routes: &[Route],
    rates: &ExpenseRates,
) -> ExpenseSummary {
    let start_time = Instant::now();
    let mut log = AuditLog { steps: Vec::new() };
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let day_count = inputs.period.day_count();
    log.record(
        "day_count",
        "Trip Day Count",
        serde_json::json!({
            "start_date": inputs.period.start_date,
            "end_date": inputs.period.end_date
        }),
        serde_json::json!({ "day_count": day_count }),
        format!(
            "{} ~ {} counted inclusively as {} day(s)",
            inputs.period.start_date, inputs.period.end_date, day_count
        ),
    );
    if day_count <= 0 {
        warnings.push(AuditWarning {
            code: WARNING_INVALID_PERIOD.to_string(),
            message: format!(
                "Period '{}' ~ '{}' has no billable days",
                inputs.period.start_date, inputs.period.end_date
            ),
        });
    }

    let route_costs = route_cost_map(routes);
    let transport = transport_total(&inputs.legs, &route_costs);
    for leg in &inputs.legs {
        if !route_costs.contains_key(leg.route.as_str()) {
            warnings.push(AuditWarning {
                code: WARNING_UNMATCHED_ROUTE.to_string(),
                message: format!("Route '{}' is not in the route table", leg.route),
            });
        }
    }
    log.record(
        "transport_total",
        "Transport Total",
        serde_json::json!({
            "routes": route_costs.len(),
            "legs": inputs.legs.len()
        }),
        serde_json::json!({ "transport_total": transport }),
        format!(
            "{} leg(s) priced against {} route(s) = {}",
            inputs.legs.len(),
            route_costs.len(),
            format_won(transport)
        ),
    );

    let lodging = lodging_total(&inputs.lodgings);
    log.record(
        "lodging_total",
        "Lodging Total",
        serde_json::json!({ "lodgings": inputs.lodgings.len() }),
        serde_json::json!({ "lodging_total": lodging }),
        format!(
            "{} lodging entr{} = {}",
            inputs.lodgings.len(),
            if inputs.lodgings.len() == 1 { "y" } else { "ies" },
            format_won(lodging)
        ),
    );

    let base_per_diem = day_count.max(0).saturating_mul(rates.daily_rate);
    let after_training = per_diem_for_mode(inputs.mode, day_count, rates.daily_rate);
    let training_deduction = base_per_diem.saturating_sub(after_training).max(0);
    log.record(
        "per_diem_training_mode",
        "Per-Diem Training Mode",
        serde_json::json!({
            "mode": inputs.mode,
            "day_count": day_count,
            "daily_rate": rates.daily_rate
        }),
        serde_json::json!({
            "base": base_per_diem,
            "after_training": after_training,
            "training_deduction": training_deduction
        }),
        if inputs.mode == TrainingMode::None {
            format!(
                "{} day(s) × {} = {}",
                day_count,
                format_won(rates.daily_rate),
                format_won(base_per_diem)
            )
        } else {
            format!(
                "{} rule over {} day(s) pays {} of {} gross",
                inputs.mode.label(),
                day_count,
                format_won(after_training),
                format_won(base_per_diem)
            )
        },
    );

    let shared_deduction =
        shared_vehicle_deduction(inputs.shared_vehicle_days, rates.daily_rate, day_count);
    let per_diem_net = after_training.saturating_sub(shared_deduction).max(0);
    log.record(
        "shared_vehicle_deduction",
        "Shared Vehicle Deduction",
        serde_json::json!({
            "shared_vehicle_days": inputs.shared_vehicle_days,
            "day_count": day_count,
            "daily_rate": rates.daily_rate
        }),
        serde_json::json!({
            "deduction": shared_deduction,
            "per_diem_net": per_diem_net
        }),
        format!(
            "{} shared-vehicle day(s) at half rate = -{}, per-diem net {}",
            inputs.shared_vehicle_days.clamp(0, day_count.max(0)),
            format_won(shared_deduction),
            format_won(per_diem_net)
        ),
    );

    let meal_gross = day_count.max(0).saturating_mul(rates.meal_rate_per_day);
    let meal_ded = meal_deduction(
        inputs.meals_provided,
        rates.meal_rate_per_day,
        rates.meal_unit_rate,
    );
    let meal_net = meal_gross.saturating_sub(meal_ded).max(0);
    log.record(
        "meal_deduction",
        "Meal Provision Deduction",
        serde_json::json!({
            "meals_provided": inputs.meals_provided,
            "meal_rate_per_day": rates.meal_rate_per_day,
            "meal_unit_rate": rates.meal_unit_rate
        }),
        serde_json::json!({
            "gross": meal_gross,
            "deduction": meal_ded,
            "net": meal_net
        }),
        format!(
            "{} meal(s) provided = -{} from {}, meal net {}",
            inputs.meals_provided,
            format_won(meal_ded),
            format_won(meal_gross),
            format_won(meal_net)
        ),
    );

    let total_deduction = training_deduction
        .saturating_add(shared_deduction)
        .saturating_add(meal_ded);
    let grand_total = transport
        .saturating_add(lodging)
        .saturating_add(per_diem_net)
        .saturating_add(meal_net);
    log.record(
        "grand_total",
        "Grand Total",
        serde_json::json!({
            "transport_total": transport,
            "lodging_total": lodging,
            "per_diem_net": per_diem_net,
            "meal_net": meal_net
        }),
        serde_json::json!({
            "total_deduction": total_deduction,
            "grand_total": grand_total
        }),
        format!(
            "{} + {} + {} + {} = {}",
            format_won(transport),
            format_won(lodging),
            format_won(per_diem_net),
            format_won(meal_net),
            format_won(grand_total)
        ),
    );

    ExpenseSummary {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period: inputs.period.clone(),
        day_count,
        mode: inputs.mode,
        per_diem: PerDiemBreakdown {
            base: base_per_diem,
            after_training,
            training_deduction,
            shared_vehicle_deduction: shared_deduction,
            net: per_diem_net,
        },
        meals: MealBreakdown {
            gross: meal_gross,
            deduction: meal_ded,
            net: meal_net,
        },
        totals: ExpenseTotals {
            transport_total: transport,
            lodging_total: lodging,
            total_deduction,
            grand_total,
        },
        audit_trace: AuditTrace {
            steps: log.steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Leg, Lodging, TripPeriod};

    fn default_routes() -> Vec<Route> {
        vec![
            Route::new("광주-서울", 45_000),
            Route::new("서울-광주", 45_000),
            Route::new("광주-대전", 21_000),
        ]
    }

    fn inputs(start: &str, end: &str, mode: TrainingMode) -> TripInputs {
        TripInputs {
            period: TripPeriod::new(start, end),
            mode,
            ..TripInputs::default()
        }
    }

    fn assert_identity(summary: &ExpenseSummary) {
        assert_eq!(
            summary.totals.grand_total,
            summary.totals.transport_total
                + summary.totals.lodging_total
                + summary.per_diem.net
                + summary.meals.net
        );
    }

    #[test]
    fn test_ordinary_three_day_trip() {
        let mut trip = inputs("2025-09-10", "2025-09-12", TrainingMode::None);
        trip.legs = vec![Leg::new("광주-서울", 1), Leg::new("서울-광주", 1)];
        trip.lodgings = vec![
            Lodging::new("2025-09-10", 60_000),
            Lodging::new("2025-09-11", 60_000),
        ];

        let summary = calculate_expenses(&trip, &default_routes(), &ExpenseRates::default());

        assert_eq!(summary.day_count, 3);
        assert_eq!(summary.per_diem.base, 75_000);
        assert_eq!(summary.per_diem.after_training, 75_000);
        assert_eq!(summary.per_diem.training_deduction, 0);
        assert_eq!(summary.per_diem.net, 75_000);
        assert_eq!(summary.meals.gross, 75_000);
        assert_eq!(summary.meals.net, 75_000);
        assert_eq!(summary.totals.transport_total, 90_000);
        assert_eq!(summary.totals.lodging_total, 120_000);
        assert_eq!(summary.totals.total_deduction, 0);
        assert_eq!(summary.totals.grand_total, 360_000);
        assert!(summary.audit_trace.warnings.is_empty());
        assert_identity(&summary);
    }

    #[test]
    fn test_dorm_training_deduction() {
        let trip = inputs("2025-09-01", "2025-09-05", TrainingMode::Dorm);
        let summary = calculate_expenses(&trip, &[], &ExpenseRates::default());

        assert_eq!(summary.per_diem.base, 125_000);
        assert_eq!(summary.per_diem.after_training, 50_000);
        assert_eq!(summary.per_diem.training_deduction, 75_000);
        assert_eq!(summary.totals.total_deduction, 75_000);
        assert_identity(&summary);
    }

    #[test]
    fn test_shared_vehicle_clamps_per_diem_net_at_zero() {
        let mut trip = inputs("2025-09-01", "2025-09-05", TrainingMode::Dorm);
        trip.shared_vehicle_days = 5;
        let summary = calculate_expenses(&trip, &[], &ExpenseRates::default());

        // 5 days at half rate (62_500) exceeds the 50_000 dorm per-diem
        assert_eq!(summary.per_diem.shared_vehicle_deduction, 62_500);
        assert_eq!(summary.per_diem.net, 0);
        assert_eq!(summary.totals.total_deduction, 75_000 + 62_500);
        assert_identity(&summary);
    }

    #[test]
    fn test_meal_deduction_may_exceed_gross() {
        let mut trip = inputs("2025-09-10", "2025-09-10", TrainingMode::None);
        trip.meals_provided = 4;
        let summary = calculate_expenses(&trip, &[], &ExpenseRates::default());

        assert_eq!(summary.meals.gross, 25_000);
        assert_eq!(summary.meals.deduction, 25_000 + 8_330);
        assert_eq!(summary.meals.net, 0);
        // the raw deduction is reported, not the clamped one
        assert_eq!(summary.totals.total_deduction, 33_330);
        assert_identity(&summary);
    }

    #[test]
    fn test_invalid_period_zeroes_day_based_figures() {
        let mut trip = inputs("2025-09-12", "2025-09-10", TrainingMode::Commute);
        trip.legs = vec![Leg::new("광주-서울", 1)];
        trip.shared_vehicle_days = 2;
        let summary = calculate_expenses(&trip, &default_routes(), &ExpenseRates::default());

        assert_eq!(summary.day_count, 0);
        assert_eq!(summary.per_diem.net, 0);
        assert_eq!(summary.meals.net, 0);
        assert_eq!(summary.per_diem.shared_vehicle_deduction, 0);
        assert_eq!(summary.totals.grand_total, 45_000);
        assert!(
            summary
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == WARNING_INVALID_PERIOD)
        );
    }

    #[test]
    fn test_unmatched_route_warning() {
        let mut trip = inputs("2025-09-10", "2025-09-10", TrainingMode::None);
        trip.legs = vec![Leg::new("부산-서울", 2), Leg::new("광주-대전", 1)];
        let summary = calculate_expenses(&trip, &default_routes(), &ExpenseRates::default());

        assert_eq!(summary.totals.transport_total, 21_000);
        let unmatched: Vec<_> = summary
            .audit_trace
            .warnings
            .iter()
            .filter(|w| w.code == WARNING_UNMATCHED_ROUTE)
            .collect();
        assert_eq!(unmatched.len(), 1);
        assert!(unmatched[0].message.contains("부산-서울"));
    }

    #[test]
    fn test_audit_steps_are_sequential() {
        let trip = inputs("2025-09-10", "2025-09-11", TrainingMode::Commute);
        let summary = calculate_expenses(&trip, &[], &ExpenseRates::default());

        let numbers: Vec<u32> = summary
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, (1..=numbers.len() as u32).collect::<Vec<_>>());
        assert_eq!(summary.audit_trace.steps[0].rule_id, "day_count");
        assert_eq!(
            summary.audit_trace.steps.last().unwrap().rule_id,
            "grand_total"
        );
    }

    #[test]
    fn test_custom_rates() {
        let rates = ExpenseRates {
            daily_rate: 20_000,
            meal_rate_per_day: 30_000,
            meal_unit_rate: 10_000,
        };
        let mut trip = inputs("2025-09-10", "2025-09-13", TrainingMode::Commute);
        trip.meals_provided = 7;
        trip.shared_vehicle_days = 1;
        let summary = calculate_expenses(&trip, &[], &rates);

        assert_eq!(summary.per_diem.base, 80_000);
        assert_eq!(summary.per_diem.after_training, 40_000 + 2 * 10_000);
        assert_eq!(summary.per_diem.shared_vehicle_deduction, 10_000);
        assert_eq!(summary.per_diem.net, 50_000);
        assert_eq!(summary.meals.deduction, 2 * 30_000 + 10_000);
        assert_eq!(summary.meals.net, 120_000 - 70_000);
        assert_eq!(summary.totals.total_deduction, 20_000 + 10_000 + 70_000);
        assert_identity(&summary);
    }
}

//! The trip ledger: one user's working session.
//!
//! A [`TripLedger`] owns the route table, the rate schedule, the inputs of
//! the trip being entered, and the list of saved summary rows. Saving
//! freezes the current calculation into a row and clears the trip inputs
//! for the next entry while keeping the route table and rates.

use tracing::{debug, info, warn};

use crate::calculation::calculate_expenses;
use crate::config::ExpenseConfig;
use crate::error::{EngineError, EngineResult};
use crate::interchange::{export_saved_rows, parse_routes_csv};
use crate::models::{
    ExpenseRates, ExpenseSummary, Leg, Lodging, Route, SavedRow, TrainingMode, TripInputs,
    TripPeriod,
};

/// A working session of trip entries and saved rows.
///
/// # Example
///
/// ```
/// use trip_expense::config::ExpenseConfig;
/// use trip_expense::ledger::TripLedger;
/// use trip_expense::models::{Leg, TripPeriod};
///
/// let mut ledger = TripLedger::new(&ExpenseConfig::default());
/// ledger.set_period(TripPeriod::new("2025-09-10", "2025-09-10"));
/// ledger.record_leg(Leg::new("서울-광주", 1));
///
/// let row = ledger.save()?;
/// assert_eq!(row.sequence_number, 1);
/// // one leg on 광주-서울 from the fresh defaults, one on 서울-광주
/// assert_eq!(row.transport_total, 90_000);
/// assert_eq!(ledger.inputs().legs.len(), 1);
/// # Ok::<(), trip_expense::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TripLedger {
    rates: ExpenseRates,
    routes: Vec<Route>,
    inputs: TripInputs,
    saved_rows: Vec<SavedRow>,
    next_sequence: u32,
}

impl TripLedger {
    /// Creates a ledger seeded with the configured rates and route table.
    pub fn new(config: &ExpenseConfig) -> Self {
        let mut ledger = Self {
            rates: *config.rates(),
            routes: config.routes().to_vec(),
            inputs: TripInputs::default(),
            saved_rows: Vec::new(),
            next_sequence: 1,
        };
        ledger.reset_inputs();
        ledger
    }

    /// Returns the rate schedule.
    pub fn rates(&self) -> &ExpenseRates {
        &self.rates
    }

    /// Returns the route table.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the inputs of the trip being entered.
    pub fn inputs(&self) -> &TripInputs {
        &self.inputs
    }

    /// Returns the saved rows, oldest first.
    pub fn saved_rows(&self) -> &[SavedRow] {
        &self.saved_rows
    }

    /// Replaces the rate schedule after validating it.
    pub fn set_rates(&mut self, rates: ExpenseRates) -> EngineResult<()> {
        rates.validate()?;
        self.rates = rates;
        Ok(())
    }

    /// Replaces the route table with edited rows.
    pub fn set_routes(&mut self, routes: Vec<Route>) {
        self.routes = routes;
    }

    /// Replaces the route table from `route,cost` CSV text.
    ///
    /// Returns the number of routes imported. When the text yields no
    /// routes the previous table is kept and [`EngineError::NoRoutesFound`]
    /// is returned.
    pub fn import_routes(&mut self, text: &str) -> EngineResult<usize> {
        let routes = parse_routes_csv(text);
        if routes.is_empty() {
            warn!(bytes = text.len(), "Route import found no valid routes");
            return Err(EngineError::NoRoutesFound);
        }
        let count = routes.len();
        self.routes = routes;
        info!(routes = count, "Imported route table");
        Ok(count)
    }

    /// Replaces all trip inputs at once.
    pub fn set_inputs(&mut self, inputs: TripInputs) {
        self.inputs = inputs;
    }

    /// Sets the trip period.
    pub fn set_period(&mut self, period: TripPeriod) {
        self.inputs.period = period;
    }

    /// Sets the per-diem policy mode.
    pub fn set_mode(&mut self, mode: TrainingMode) {
        self.inputs.mode = mode;
    }

    /// Sets the number of shared-vehicle days; negative counts become 0.
    pub fn set_shared_vehicle_days(&mut self, days: i64) {
        self.inputs.shared_vehicle_days = days.max(0);
    }

    /// Sets the number of meals provided; negative counts become 0.
    pub fn set_meals_provided(&mut self, meals: i64) {
        self.inputs.meals_provided = meals.max(0);
    }

    /// Appends a journey leg.
    pub fn record_leg(&mut self, leg: Leg) {
        self.inputs.legs.push(leg);
    }

    /// Appends a lodging entry.
    pub fn record_lodging(&mut self, lodging: Lodging) {
        self.inputs.lodgings.push(lodging);
    }

    /// Calculates the current trip against the route table and rates.
    pub fn calculate(&self) -> ExpenseSummary {
        calculate_expenses(&self.inputs, &self.routes, &self.rates)
    }

    /// Saves the current trip as a new row and resets the inputs.
    ///
    /// Fails with [`EngineError::InvalidPeriod`] when the period has no
    /// billable days; nothing is appended or reset in that case.
    pub fn save(&mut self) -> EngineResult<&SavedRow> {
        let summary = self.calculate();
        if summary.day_count <= 0 {
            warn!(
                start = %self.inputs.period.start_date,
                end = %self.inputs.period.end_date,
                "Rejected save of trip without billable days"
            );
            return Err(EngineError::InvalidPeriod {
                start: self.inputs.period.start_date.clone(),
                end: self.inputs.period.end_date.clone(),
            });
        }

        let row = summary.to_saved_row(self.next_sequence);
        self.next_sequence += 1;
        info!(
            sequence_number = row.sequence_number,
            calculation_id = %summary.calculation_id,
            grand_total = row.grand_total,
            "Saved trip expense row"
        );
        self.saved_rows.push(row);
        self.reset_inputs();

        let last = self.saved_rows.len() - 1;
        Ok(&self.saved_rows[last])
    }

    /// Clears the trip inputs back to their defaults.
    ///
    /// The legs are reset to a single trip on the first route of the
    /// table (or an unnamed route when the table is empty). The route
    /// table, rates and saved rows are left untouched.
    pub fn reset_inputs(&mut self) {
        let first_route = self
            .routes
            .first()
            .map(|route| route.name.clone())
            .unwrap_or_default();
        self.inputs = TripInputs {
            legs: vec![Leg::new(first_route, 1)],
            ..TripInputs::default()
        };
        debug!("Reset trip inputs");
    }

    /// Renders the saved rows as the BOM-prefixed CSV export.
    pub fn export_csv(&self) -> String {
        export_saved_rows(&self.saved_rows)
    }
}

impl Default for TripLedger {
    fn default() -> Self {
        Self::new(&ExpenseConfig::default())
    }
}

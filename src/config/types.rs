//! Configuration types for the trip expense engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{ExpenseRates, Route};

/// Route table file structure (`routes.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    /// The default route table, in display order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// The complete engine configuration.
///
/// Holds the rate schedule new ledgers start with and the route table
/// they are seeded with.
///
/// # Example
///
/// ```
/// use trip_expense::config::ExpenseConfig;
///
/// let config = ExpenseConfig::default();
/// assert_eq!(config.rates().daily_rate, 25_000);
/// assert_eq!(config.routes()[0].name, "광주-서울");
/// ```
#[derive(Debug, Clone)]
pub struct ExpenseConfig {
    rates: ExpenseRates,
    routes: Vec<Route>,
}

impl ExpenseConfig {
    /// Creates a new configuration from its component parts.
    pub fn new(rates: ExpenseRates, routes: Vec<Route>) -> Self {
        Self { rates, routes }
    }

    /// Returns the default rate schedule.
    pub fn rates(&self) -> &ExpenseRates {
        &self.rates
    }

    /// Returns the default route table.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the built-in route table.
    pub fn default_routes() -> Vec<Route> {
        vec![
            Route::new("광주-서울", 45_000),
            Route::new("서울-광주", 45_000),
            Route::new("광주-대전", 21_000),
        ]
    }
}

impl Default for ExpenseConfig {
    fn default() -> Self {
        Self::new(ExpenseRates::default(), Self::default_routes())
    }
}

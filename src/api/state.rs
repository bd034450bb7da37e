//! Application state for the trip expense API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::ConfigLoader;
use crate::ledger::TripLedger;

/// Shared application state.
///
/// Holds the loaded configuration and the one ledger all ledger endpoints
/// operate on. The ledger lock is only held inside synchronous sections.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The shared session ledger.
    ledger: Arc<Mutex<TripLedger>>,
}

impl AppState {
    /// Creates a new application state with a fresh ledger.
    pub fn new(config: ConfigLoader) -> Self {
        let ledger = TripLedger::new(config.config());
        Self {
            config: Arc::new(config),
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Locks the shared ledger.
    ///
    /// A poisoned lock is recovered: every ledger operation leaves the
    /// ledger consistent before it can panic.
    pub fn ledger(&self) -> MutexGuard<'_, TripLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpenseConfig;
    use crate::models::{ExpenseRates, Route};

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_ledger() {
        let state = AppState::new(ConfigLoader::default());
        let other = state.clone();
        state.ledger().set_meals_provided(4);
        assert_eq!(other.ledger().inputs().meals_provided, 4);
    }

    #[test]
    fn test_ledger_is_seeded_from_config() {
        let rates = ExpenseRates {
            daily_rate: 30_000,
            ..ExpenseRates::default()
        };
        let routes = vec![Route::new("부산-서울", 59_800)];
        let state = AppState::new(ConfigLoader::from_config(ExpenseConfig::new(
            rates,
            routes.clone(),
        )));

        assert_eq!(state.config().rates().daily_rate, 30_000);
        assert_eq!(*state.ledger().rates(), rates);
        assert_eq!(state.ledger().routes(), routes.as_slice());
    }
}

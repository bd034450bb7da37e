//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ExpenseRates, Route};

use super::types::{ExpenseConfig, RoutesConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml   # daily_rate, meal_rate_per_day, meal_unit_rate
/// └── routes.yaml  # optional default route table
/// ```
///
/// When `routes.yaml` is absent the built-in route table is used.
///
/// # Example
///
/// ```no_run
/// use trip_expense::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Daily rate: {}", loader.rates().daily_rate);
/// # Ok::<(), trip_expense::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ExpenseConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `rates.yaml` is missing, if any file contains
    /// invalid YAML, or if a rate is negative.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<ExpenseRates>(&path.join("rates.yaml"))?;
        rates.validate()?;

        let routes_path = path.join("routes.yaml");
        let routes = if routes_path.exists() {
            Self::load_yaml::<RoutesConfig>(&routes_path)?.routes
        } else {
            ExpenseConfig::default_routes()
        };

        debug!(
            path = %path.display(),
            daily_rate = rates.daily_rate,
            routes = routes.len(),
            "Loaded expense configuration"
        );

        Ok(Self {
            config: ExpenseConfig::new(rates, routes),
        })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: ExpenseConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ExpenseConfig {
        &self.config
    }

    /// Returns the configured rate schedule.
    pub fn rates(&self) -> &ExpenseRates {
        self.config.rates()
    }

    /// Returns the configured route table.
    pub fn routes(&self) -> &[Route] {
        self.config.routes()
    }
}

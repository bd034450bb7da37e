//! Configuration loading and management for the trip expense engine.
//!
//! This module loads the default rate schedule and route table from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use trip_expense::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Routes: {}", config.routes().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ExpenseConfig, RoutesConfig};

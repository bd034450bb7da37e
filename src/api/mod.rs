//! HTTP API module for the trip expense engine.
//!
//! This module provides the REST endpoints for one-off calculations and
//! for driving the shared trip ledger (route import, save, rows, export).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ImportResponse, RateOverrides};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

//! Business-Trip Expense Engine
//!
//! This crate computes travel expense claims: per-diem under training-travel
//! policy modes, meal and shared-vehicle deductions, transport and lodging
//! totals, and a ledger of saved summary rows with CSV import and export.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod interchange;
pub mod ledger;
pub mod models;

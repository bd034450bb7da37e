//! CSV import and export.
//!
//! Route tables come in as loosely formatted `route,cost` text and saved
//! summary rows go out as a BOM-prefixed CSV file.
//!
//! # Example
//!
//! ```
//! use trip_expense::interchange::{parse_routes_csv, to_csv};
//!
//! let text = to_csv(&[["route", "cost"], ["광주-서울", "45000"]]);
//! let routes = parse_routes_csv(&text);
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].cost, 45_000);
//! ```

mod csv_writer;
mod route_import;

pub use csv_writer::{
    EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, csv_escape_cell, export_saved_rows, to_csv,
};
pub use route_import::{BYTE_ORDER_MARK, decode_upload, parse_routes_csv};

//! Route table import from `route,cost` CSV text.
//!
//! The format is deliberately forgiving because it is typed or exported by
//! hand from spreadsheets:
//!
//! ```text
//! route,cost
//! 광주-서울,45,000
//! 서울-광주,45000
//! ```
//!
//! Columns are split on every comma, so a thousands separator in the cost
//! spills over into extra columns. Everything after the first column is
//! glued back together before the cost is read, which absorbs the
//! separators.

use rust_decimal::prelude::ToPrimitive;

use crate::calculation::parse_decimal;
use crate::models::Route;

/// UTF-8 byte order mark, as it appears once decoded.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Decodes uploaded bytes as UTF-8, silently dropping invalid sequences.
///
/// # Examples
///
/// ```
/// use trip_expense::interchange::decode_upload;
///
/// let bytes = b"route,cost\n\xffabc,100";
/// assert_eq!(decode_upload(bytes), "route,cost\nabc,100");
/// ```
pub fn decode_upload(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

/// Parses route CSV text into route records.
///
/// - lines may end in `\n` or `\r\n`; blank lines are skipped;
/// - the first non-blank line is skipped when it looks like a header
///   (`route` in column 1 and `cost` or `금액` in column 2, any case);
/// - lines with fewer than two columns or an empty route name are dropped;
/// - the cost keeps only digits, `.` and `-`; an empty or unreadable cost
///   is 0, fractions are truncated, and negatives are clamped to 0.
///
/// Input order is kept and duplicate names are not merged.
///
/// # Examples
///
/// ```
/// use trip_expense::interchange::parse_routes_csv;
/// use trip_expense::models::Route;
///
/// let routes = parse_routes_csv("route,cost\r\n광주-서울,45,000\r\n\r\n서울-광주,45000원");
/// assert_eq!(
///     routes,
///     vec![Route::new("광주-서울", 45_000), Route::new("서울-광주", 45_000)]
/// );
/// ```
pub fn parse_routes_csv(text: &str) -> Vec<Route> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let mut routes = Vec::new();
    for (index, line) in lines.enumerate() {
        let columns: Vec<&str> = line.split(',').map(str::trim).collect();
        if index == 0 && is_header(&columns) {
            continue;
        }
        if columns.len() < 2 {
            continue;
        }
        let name = columns[0];
        if name.is_empty() {
            continue;
        }
        routes.push(Route::new(name, parse_cost(&columns[1..].concat())));
    }
    routes
}

fn is_header(columns: &[&str]) -> bool {
    let route_column = columns.first().map(|c| c.to_lowercase()).unwrap_or_default();
    let cost_column = columns.get(1).map(|c| c.to_lowercase()).unwrap_or_default();
    route_column.contains("route") && (cost_column.contains("cost") || cost_column.contains("금액"))
}

fn parse_cost(raw: &str) -> i64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return 0;
    }
    parse_decimal(&cleaned)
        .and_then(|value| value.trunc().to_i64())
        .unwrap_or(0)
        .max(0)
}

//! Numeric coercion and currency formatting.
//!
//! Every amount in the engine is a whole number of won. Inputs arrive in
//! many shapes (numbers, numeric strings, blanks), so they pass through
//! [`coerce_amount`], which never fails: anything that is not a finite
//! number becomes 0. Rounding is always half-to-even.

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Suffix appended to formatted amounts.
pub const CURRENCY_SUFFIX: &str = "원";

/// Rounds a decimal to a whole number, ties to even.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::round_half_even;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_even(Decimal::from_str("12500.5").unwrap()), 12500);
/// assert_eq!(round_half_even(Decimal::from_str("12501.5").unwrap()), 12502);
/// assert_eq!(round_half_even(Decimal::from_str("-2.5").unwrap()), -2);
/// ```
pub fn round_half_even(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .unwrap_or(0)
}

/// Returns half of a daily rate, rounded half-to-even.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::half_rate;
///
/// assert_eq!(half_rate(25_000), 12_500);
/// assert_eq!(half_rate(25_001), 12_500);
/// assert_eq!(half_rate(25_003), 12_502);
/// ```
pub fn half_rate(rate: i64) -> i64 {
    round_half_even(Decimal::from(rate) / Decimal::from(2))
}

/// Converts a loosely typed value to a whole amount.
///
/// Numbers and numeric strings (surrounding whitespace allowed, scientific
/// notation accepted) are rounded half-to-even. Booleans count as 1 and 0.
/// Everything else, including NaN, infinities, and values outside the
/// representable range, yields 0.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::coerce_amount;
/// use serde_json::json;
///
/// assert_eq!(coerce_amount(&json!(45000)), 45000);
/// assert_eq!(coerce_amount(&json!(" 2.5 ")), 2);
/// assert_eq!(coerce_amount(&json!("3.5")), 4);
/// assert_eq!(coerce_amount(&json!("1e3")), 1000);
/// assert_eq!(coerce_amount(&json!("NaN")), 0);
/// assert_eq!(coerce_amount(&json!("abc")), 0);
/// assert_eq!(coerce_amount(&json!(null)), 0);
/// ```
pub fn coerce_amount(value: &Value) -> i64 {
    value_to_decimal(value).map(round_half_even).unwrap_or(0)
}

/// Converts a loosely typed value to a whole amount, dropping any fraction.
///
/// Accepts the same shapes as [`coerce_amount`] but truncates toward zero,
/// which is how table cells and CSV costs are read.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::truncate_amount;
/// use serde_json::json;
///
/// assert_eq!(truncate_amount(&json!(45000.9)), 45000);
/// assert_eq!(truncate_amount(&json!("2.5")), 2);
/// assert_eq!(truncate_amount(&json!(-3.7)), -3);
/// assert_eq!(truncate_amount(&json!("abc")), 0);
/// ```
pub fn truncate_amount(value: &Value) -> i64 {
    value_to_decimal(value)
        .and_then(|decimal| decimal.trunc().to_i64())
        .unwrap_or(0)
}

fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Decimal::from(i)),
            None => n.as_f64().and_then(decimal_from_f64),
        },
        Value::String(s) => parse_decimal(s),
        Value::Bool(b) => Some(Decimal::from(u8::from(*b))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses numeric text into a decimal, `None` if it is not a finite number.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(decimal_from_f64))
}

fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if value.is_finite() {
        Decimal::from_f64(value)
    } else {
        None
    }
}

/// Formats an amount with thousands separators and the currency suffix.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::format_won;
///
/// assert_eq!(format_won(0), "0원");
/// assert_eq!(format_won(8330), "8,330원");
/// assert_eq!(format_won(1_234_567), "1,234,567원");
/// assert_eq!(format_won(-45000), "-45,000원");
/// ```
pub fn format_won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, grouped, CURRENCY_SUFFIX)
}

/// Coerces a loosely typed value and formats it; `null` formats as `0원`.
pub fn format_won_value(value: &Value) -> String {
    format_won(coerce_amount(value))
}

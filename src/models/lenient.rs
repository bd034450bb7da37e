//! Tolerant field deserializers for records supplied by table editors.
//!
//! Rows coming from a spreadsheet-like editor carry loosely typed cells:
//! numbers may arrive as strings, empty cells as `null`. These helpers
//! normalize such cells once at the boundary so the engine only ever
//! sees typed, non-negative values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::calculation::truncate_amount;

/// Deserializes any JSON value into a non-negative integer amount.
///
/// Fractions are dropped, unparsable values become 0, and negative values
/// are clamped to 0.
pub(crate) fn non_negative_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(truncate_amount(&value).max(0))
}

/// Deserializes any JSON value into a string; `null` becomes empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

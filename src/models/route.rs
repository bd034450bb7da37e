//! Route, leg, and lodging records.
//!
//! A [`Route`] is one row of the fare table, a [`Leg`] is one journey along
//! a named route, and a [`Lodging`] is one night of actual-cost lodging.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A named route and its one-way fare.
///
/// Serialized with the key `route` for the name, matching the CSV header
/// `route,cost` used by the import format.
///
/// # Example
///
/// ```
/// use trip_expense::models::Route;
///
/// let route: Route = serde_json::from_str(r#"{"route": "광주-서울", "cost": "45000"}"#).unwrap();
/// assert_eq!(route, Route::new("광주-서울", 45000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The route name, used as the lookup key for legs.
    #[serde(rename = "route", default, deserialize_with = "lenient::text")]
    pub name: String,
    /// The fare for one trip along this route.
    #[serde(default, deserialize_with = "lenient::non_negative_amount")]
    pub cost: i64,
}

impl Route {
    /// Creates a new route; a negative cost is clamped to 0.
    pub fn new(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost: cost.max(0),
        }
    }
}

/// One journey along a route, repeated `quantity` times.
///
/// The route refers to a [`Route`] by name. A name that is not in the
/// route table contributes nothing to the transport total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// The name of the route travelled.
    #[serde(default, deserialize_with = "lenient::text")]
    pub route: String,
    /// How many times the route was travelled.
    #[serde(
        default,
        alias = "qty",
        deserialize_with = "lenient::non_negative_amount"
    )]
    pub quantity: i64,
}

impl Leg {
    /// Creates a new leg; a negative quantity is clamped to 0.
    pub fn new(route: impl Into<String>, quantity: i64) -> Self {
        Self {
            route: route.into(),
            quantity: quantity.max(0),
        }
    }
}

/// An actual-cost lodging entry.
///
/// The date is informational only and is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lodging {
    /// The night this lodging covers, as entered.
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    /// The amount paid.
    #[serde(default, deserialize_with = "lenient::non_negative_amount")]
    pub amount: i64,
}

impl Lodging {
    /// Creates a new lodging entry; a negative amount is clamped to 0.
    pub fn new(date: impl Into<String>, amount: i64) -> Self {
        Self {
            date: date.into(),
            amount: amount.max(0),
        }
    }
}

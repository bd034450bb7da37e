//! Transport and lodging totals.

use std::collections::HashMap;

use crate::models::{Leg, Lodging, Route};

/// Builds a route name → cost lookup.
///
/// Routes are inserted in table order, so when a name appears more than
/// once the last entry wins.
///
/// # Examples
///
/// ```
/// use trip_expense::calculation::route_cost_map;
/// use trip_expense::models::Route;
///
/// let routes = vec![Route::new("광주-서울", 45_000), Route::new("광주-서울", 40_000)];
/// assert_eq!(route_cost_map(&routes)["광주-서울"], 40_000);
/// ```
pub fn route_cost_map(routes: &[Route]) -> HashMap<&str, i64> {
    routes
        .iter()
        .map(|route| (route.name.as_str(), route.cost))
        .collect()
}

/// Sums fares over all legs; a leg on an unknown route costs nothing.
pub fn transport_total(legs: &[Leg], route_costs: &HashMap<&str, i64>) -> i64 {
    legs.iter()
        .map(|leg| {
            route_costs
                .get(leg.route.as_str())
                .copied()
                .unwrap_or(0)
                .saturating_mul(leg.quantity)
        })
        .fold(0i64, i64::saturating_add)
}

/// Sums lodging amounts, without any date checks.
pub fn lodging_total(lodgings: &[Lodging]) -> i64 {
    lodgings
        .iter()
        .map(|lodging| lodging.amount)
        .fold(0i64, i64::saturating_add)
}

//! Row-wise filtering of the loaded table.

use crate::models::filter::TripFilter;
use crate::models::trip::Trip;

/// Return the trips matching `filter` as an owned snapshot. The source
/// slice is never mutated, so filtering the same table with the same
/// constraints always yields the same result set.
pub fn apply(trips: &[Trip], filter: &TripFilter) -> Vec<Trip> {
    trips
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

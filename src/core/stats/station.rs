//! Most popular stations and start→end trip.

use crate::core::mode::mode;
use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;

#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: String,
    pub most_common_end: String,
    /// Most frequent (start, end) pair, counted as one joint key.
    pub most_common_trip: (String, String),
}

pub fn compute(trips: &[Trip]) -> AppResult<StationStats> {
    let most_common_start =
        mode(trips.iter().map(|t| t.start_station.clone())).ok_or(AppError::EmptyDataset)?;

    let most_common_end =
        mode(trips.iter().map(|t| t.end_station.clone())).ok_or(AppError::EmptyDataset)?;

    let most_common_trip = mode(
        trips
            .iter()
            .map(|t| (t.start_station.clone(), t.end_station.clone())),
    )
    .ok_or(AppError::EmptyDataset)?;

    Ok(StationStats {
        most_common_start,
        most_common_end,
        most_common_trip,
    })
}

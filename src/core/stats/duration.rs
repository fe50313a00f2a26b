//! Total and average trip duration.

use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;

#[derive(Debug, PartialEq, Eq)]
pub struct DurationStats {
    pub total_secs: u64,
    /// Arithmetic mean truncated to whole seconds.
    pub mean_secs: u64,
}

pub fn compute(trips: &[Trip]) -> AppResult<DurationStats> {
    if trips.is_empty() {
        // the mean of zero trips is undefined
        return Err(AppError::EmptyDataset);
    }

    let total_secs: u64 = trips.iter().map(|t| t.duration_secs).sum();
    let mean_secs = total_secs / trips.len() as u64;

    Ok(DurationStats {
        total_secs,
        mean_secs,
    })
}

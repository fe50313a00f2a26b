//! Most frequent travel times over the filtered table.

use crate::core::mode::mode;
use crate::errors::{AppError, AppResult};
use crate::models::filter::TripFilter;
use crate::models::trip::Trip;

/// Most frequent month / day / hour. `month` and `day` are `None` when the
/// session filter already fixed them: reporting back a constant the user
/// chose is noise.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<&'static str>,
    pub most_common_hour: u32,
}

pub fn compute(trips: &[Trip], filter: &TripFilter) -> AppResult<TimeStats> {
    if trips.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    let most_common_month = if filter.month.is_some() {
        None
    } else {
        mode(trips.iter().map(|t| t.month))
    };

    let most_common_day = if filter.day.is_some() {
        None
    } else {
        // alphabetical tie-break over the capitalized day names
        mode(trips.iter().map(|t| t.day_name))
    };

    // trips is non-empty, so the hour mode always exists
    let most_common_hour =
        mode(trips.iter().map(|t| t.start_hour)).ok_or(AppError::EmptyDataset)?;

    Ok(TimeStats {
        most_common_month,
        most_common_day,
        most_common_hour,
    })
}

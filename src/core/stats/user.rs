//! Rider breakdowns by user type and, where available, gender.

use crate::core::mode::value_counts;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::trip::Trip;

#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    /// (value, count) in descending frequency, ties alphabetical.
    pub user_types: Vec<(String, u64)>,
    /// `None` for cities whose data carries no gender column.
    pub genders: Option<Vec<(String, u64)>>,
}

pub fn compute(trips: &[Trip], city: City) -> AppResult<UserStats> {
    if trips.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    // blank values are not a category
    let user_types = value_counts(
        trips
            .iter()
            .filter(|t| !t.user_type.trim().is_empty())
            .map(|t| t.user_type.clone()),
    );

    let genders = if city.has_gender() {
        Some(value_counts(
            trips.iter().filter_map(|t| t.gender.clone()),
        ))
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
    })
}

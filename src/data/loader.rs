//! CSV ingestion for the per-city trip files.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::trip::{RawTrip, Trip};

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load every trip for `city` from its CSV under `data_dir`, deriving the
/// month / weekday / start-hour fields as rows come in.
///
/// A start timestamp that fails to parse aborts the whole load: a broken
/// source file is a data-integrity problem, not something to paper over
/// row by row.
pub fn load_city(data_dir: &Path, city: City) -> AppResult<Vec<Trip>> {
    let path = city.data_path(data_dir);
    let mut reader = csv::Reader::from_path(&path)?;

    let mut trips = Vec::new();
    for (idx, record) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = record?;
        // header is line 1, first record line 2
        trips.push(trip_from_raw(raw, idx + 2)?);
    }

    Ok(trips)
}

fn trip_from_raw(raw: RawTrip, line: usize) -> AppResult<Trip> {
    let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT).map_err(
        |_| AppError::MalformedTimestamp {
            line,
            value: raw.start_time.clone(),
        },
    )?;

    // Durations and birth years appear as "672.0" in some files; truncate.
    let duration_secs = raw.trip_duration.max(0.0) as u64;
    let gender = raw.gender.filter(|g| !g.trim().is_empty());
    let birth_year = raw.birth_year.map(|y| y as i32);

    Ok(Trip::new(
        start_time,
        raw.end_time,
        duration_secs,
        raw.start_station,
        raw.end_station,
        raw.user_type,
        gender,
        birth_year,
    ))
}

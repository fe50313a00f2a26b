use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::utils::formatting::day_name;

/// One row as it appears in the city CSV files. Column names follow the
/// published header; `Gender` and `Birth Year` are absent for Washington
/// and may be blank elsewhere.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A loaded trip record with the calendar fields derived from the start
/// timestamp. The derived fields are computed once in [`Trip::new`] and are
/// always consistent with `start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    /// Kept as raw text: nothing downstream parses it.
    pub end_time: String,
    pub duration_secs: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub day_name: &'static str,
    pub start_hour: u32,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: String,
        duration_secs: u64,
        start_station: String,
        end_station: String,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            day_name: day_name(start_time.weekday()),
            start_hour: start_time.hour(),
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// The three cities with published trip data. Each maps to one CSV source
/// file; Washington's file carries no gender or birth-year columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Parse a user-supplied city name (case-insensitive).
    pub fn parse(input: &str) -> AppResult<Self> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york" => Ok(City::NewYork),
            "washington" => Ok(City::Washington),
            _ => Err(AppError::UnknownCity(input.trim().to_string())),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }

    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.data_file())
    }

    /// Whether this city's source carries the Gender / Birth Year columns.
    pub fn has_gender(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

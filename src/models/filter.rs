use chrono::Weekday;

use crate::models::trip::Trip;
use crate::utils::formatting::day_name;

/// Months a session may filter by. The published datasets cover the first
/// half of the year only, so later months are not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// Parse a month name (case-insensitive). Months after June are not
    /// valid filter values.
    pub fn from_name(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            _ => None,
        }
    }

    /// Calendar month number, 1-based.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}

/// Parse a weekday name. Chrono accepts full English names and the usual
/// three-letter abbreviations, case-insensitive.
pub fn parse_day(input: &str) -> Option<Weekday> {
    input.trim().parse::<Weekday>().ok()
}

/// The month/day constraints of one session. Absent constraints match
/// everything; present constraints are ANDed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripFilter {
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl TripFilter {
    pub fn new(month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { month, day }
    }

    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        let month_ok = self.month.is_none_or(|m| trip.month == m.number());
        let day_ok = self.day.is_none_or(|d| trip.day_name == day_name(d));
        month_ok && day_ok
    }
}

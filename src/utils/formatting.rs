//! Formatting utilities used for CLI output.

use chrono::{NaiveTime, Weekday};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a second count as a readable duration, e.g. `01h 02m 03s` or
/// `2d 01h 02m 03s`. The day segment only appears when non-zero.
pub fn secs2readable(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
    } else {
        format!("{:02}h {:02}m {:02}s", hours, minutes, seconds)
    }
}

/// An hour of day (0-23) on the 12-hour clock, e.g. `05:00 PM`.
pub fn hour12(hour: u32) -> String {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(t) => t.format("%I:%M %p").to_string(),
        None => format!("{:02}:00", hour),
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Full English weekday name, capitalized (chrono's Display is "Mon").
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

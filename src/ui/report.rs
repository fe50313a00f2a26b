//! Labelled printing of the aggregator results. Layout and wording follow
//! the classic bikeshare report: one "Calculating ..." heading per
//! section, bullet lines per value.

use ansi_term::Colour;

use crate::core::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::models::trip::Trip;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::formatting::{hour12, month_name, secs2readable};
use crate::utils::table::{Column, Table};

fn heading(label: &str) {
    println!("\n{}\n", Colour::Cyan.bold().paint(label));
}

pub fn time_stats(stats: &TimeStats) {
    heading("Calculating The Most Frequent Times of Travel...");

    if let Some(month) = stats.most_common_month {
        println!(
            "{}• Most common month:{} {}{}{}",
            CYAN,
            RESET,
            YELLOW,
            month_name(month),
            RESET
        );
    }
    if let Some(day) = stats.most_common_day {
        println!(
            "{}• Most common day of week:{} {}{}{}",
            CYAN, RESET, YELLOW, day, RESET
        );
    }
    println!(
        "{}• Most common start hour:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        hour12(stats.most_common_hour),
        RESET
    );
}

pub fn station_stats(stats: &StationStats) {
    heading("Calculating The Most Popular Stations and Trip...");

    println!(
        "{}• Most commonly used start station:{} {}",
        CYAN, RESET, stats.most_common_start
    );
    println!(
        "{}• Most commonly used end station:{} {}",
        CYAN, RESET, stats.most_common_end
    );
    println!(
        "{}• Most common trip:{} {} {}TO{} {}",
        CYAN, RESET, stats.most_common_trip.0, CYAN, RESET, stats.most_common_trip.1
    );
}

pub fn duration_stats(stats: &DurationStats) {
    heading("Calculating Trip Duration...");

    println!(
        "{}• Total travel time:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        secs2readable(stats.total_secs),
        RESET
    );
    println!(
        "{}• Average travel time:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        secs2readable(stats.mean_secs),
        RESET
    );
}

pub fn user_stats(stats: &UserStats) {
    heading("Calculating User Stats...");

    println!("{}• Counts by user type:{}", CYAN, RESET);
    for (user_type, count) in &stats.user_types {
        println!("    {:<12} {}{}{}", user_type, GREEN, count, RESET);
    }

    if let Some(genders) = &stats.genders {
        println!("{}• Counts by gender:{}", CYAN, RESET);
        for (gender, count) in genders {
            println!("    {:<12} {}{}{}", gender, GREEN, count, RESET);
        }
    }
}

/// Render one viewer page as a fixed-width table.
pub fn trips_page(trips: &[Trip]) {
    let mut table = Table::new(vec![
        Column::new("Start Time", 19),
        Column::new("Duration", 9),
        Column::new("Start Station", 28),
        Column::new("End Station", 28),
        Column::new("User Type", 10),
    ]);

    for trip in trips {
        table.add_row(vec![
            trip.start_time_str(),
            trip.duration_secs.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone(),
        ]);
    }

    print!("{}", table.render());
}

/// Elapsed-time footer printed after each stats section.
pub fn took(elapsed: std::time::Duration) {
    println!("\nThis took {:.4} seconds.", elapsed.as_secs_f64());
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikestats::models::trip::Trip;
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikestats")
}

/// Create a unique data directory inside the system temp dir and populate
/// it with the three city CSV fixtures.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fixture dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago fixture");
    fs::write(path.join("new_york_city.csv"), NEW_YORK_CSV).expect("write new york fixture");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington fixture");

    path.to_string_lossy().to_string()
}

/// Six Chicago trips: three in June (two on Monday the 5th), two in May,
/// one in January. Hour 9 dominates; "A St" is the top start station.
pub const CHICAGO_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-06-05 09:15:00,2017-06-05 09:20:00,300,A St,B St,Subscriber,Male,1989.0
2017-06-05 09:40:00,2017-06-05 09:50:00,600,A St,C St,Subscriber,Female,1992.0
2017-06-12 17:20:00,2017-06-12 17:35:00,900,B St,C St,Customer,Male,
2017-05-20 09:05:00,2017-05-20 09:07:00,120,A St,B St,Subscriber,Female,1985.0
2017-05-21 14:00:00,2017-05-21 14:01:00,60,C St,A St,Customer,,
2017-01-03 09:00:00,2017-01-03 09:00:30,30,B St,A St,Subscriber,Male,1990.0
";

pub const NEW_YORK_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-03-01 07:30:00,2017-03-01 07:45:00,900,Broadway,Wall St,Subscriber,Female,1991.0
2017-03-02 07:35:00,2017-03-02 07:50:00,900,Broadway,Wall St,Subscriber,Male,1978.0
";

pub const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-04-10 08:00:00,2017-04-10 08:10:00,600.0,Dupont Circle,Union Station,Subscriber
2017-04-11 18:30:00,2017-04-11 18:50:00,1200.0,Union Station,Dupont Circle,Customer
";

/// In-memory trip builder for aggregator tests.
pub fn trip(
    start: &str,
    duration_secs: u64,
    start_station: &str,
    end_station: &str,
    user_type: &str,
    gender: Option<&str>,
) -> Trip {
    let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
        .expect("fixture timestamp parses");
    Trip::new(
        start_time,
        String::new(),
        duration_secs,
        start_station.to_string(),
        end_station.to_string(),
        user_type.to_string(),
        gender.map(str::to_string),
        None,
    )
}

/// n trips with distinct start stations, for pagination tests.
pub fn numbered_trips(n: usize) -> Vec<Trip> {
    (0..n)
        .map(|i| {
            trip(
                "2017-06-05 09:15:00",
                60,
                &format!("Station {}", i),
                "End",
                "Subscriber",
                None,
            )
        })
        .collect()
}

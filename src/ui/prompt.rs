//! Interactive input loops. Every prompt re-asks until the answer is
//! valid; validation failures never leave this module. Readers are generic
//! so tests can feed answers from memory.

use std::io::{self, BufRead};

use chrono::Weekday;

use crate::models::city::City;
use crate::models::filter::{Month, parse_day};

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        // stdin closed mid-session
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Yes/no question. Accepts y / ye / yes and n / no, case-insensitive.
pub fn confirm<R: BufRead>(input: &mut R, question: &str) -> io::Result<bool> {
    loop {
        println!("{}", question);
        match read_answer(input)?.to_lowercase().as_str() {
            "y" | "ye" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Invalid response!\n"),
        }
    }
}

pub fn city<R: BufRead>(input: &mut R) -> io::Result<City> {
    loop {
        println!("Select the CITY you would like to check: Chicago, New York, or Washington");
        let answer = read_answer(input)?;
        match City::parse(&answer) {
            Ok(city) => return Ok(city),
            Err(_) => println!(
                "Results cannot be filtered by \"{}\". Please select a valid city!\n",
                answer
            ),
        }
    }
}

pub fn month<R: BufRead>(input: &mut R) -> io::Result<Month> {
    loop {
        println!(
            "What MONTH would you like to filter by? (January, February, March, April, May, or June)"
        );
        let answer = read_answer(input)?;
        match Month::from_name(&answer) {
            Some(month) => return Ok(month),
            None => println!(
                "Results cannot be filtered by \"{}\", please select a valid month!\n",
                answer
            ),
        }
    }
}

pub fn day<R: BufRead>(input: &mut R) -> io::Result<Weekday> {
    loop {
        println!("What DAY OF WEEK would you like to filter by? (Monday, Tuesday, ...)");
        let answer = read_answer(input)?;
        match parse_day(&answer) {
            Some(day) => return Ok(day),
            None => println!(
                "Results cannot be filtered by \"{}\", please select a valid day!\n",
                answer
            ),
        }
    }
}

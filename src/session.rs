//! One interactive session: gather filters, load, aggregate, report.
//! All user interaction funnels through `ui::prompt`; the core modules
//! never see invalid input.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use crate::core::pager::Pager;
use crate::core::stats::{duration, station, time, user};
use crate::data;
use crate::errors::AppResult;
use crate::models::filter::TripFilter;
use crate::models::trip::Trip;
use crate::ui::{messages, prompt, report};
use crate::utils::formatting::bold;

pub fn run_session<R: BufRead>(input: &mut R, data_dir: &Path) -> AppResult<()> {
    messages::rule();
    println!("{}", bold("Hello! Let's explore some US bikeshare data!"));
    messages::rule();

    let city = prompt::city(input)?;
    let filter = ask_filters(input)?;
    messages::rule();

    let table = data::load_city(data_dir, city)?;
    let filtered = crate::core::filter::apply(&table, &filter);

    if filtered.is_empty() {
        messages::warning(format!(
            "No {} trips match the selected filters.",
            city.display_name()
        ));
        return Ok(());
    }

    let started = Instant::now();
    let time_stats = time::compute(&filtered, &filter)?;
    report::time_stats(&time_stats);
    report::took(started.elapsed());
    messages::rule();

    let started = Instant::now();
    let station_stats = station::compute(&filtered)?;
    report::station_stats(&station_stats);
    report::took(started.elapsed());
    messages::rule();

    if prompt::confirm(
        input,
        "Would you like to see info about trip duration and users? y/n",
    )? {
        let started = Instant::now();
        let duration_stats = duration::compute(&filtered)?;
        report::duration_stats(&duration_stats);
        report::took(started.elapsed());
        messages::rule();

        let started = Instant::now();
        let user_stats = user::compute(&filtered, city)?;
        report::user_stats(&user_stats);
        report::took(started.elapsed());
        messages::rule();
    }

    view_rows(input, &filtered)?;
    Ok(())
}

fn ask_filters<R: BufRead>(input: &mut R) -> AppResult<TripFilter> {
    let month = if prompt::confirm(input, "Would you like to filter by MONTH? y/n")? {
        Some(prompt::month(input)?)
    } else {
        None
    };

    let day = if prompt::confirm(input, "Would you like to filter by DAY OF WEEK? y/n")? {
        Some(prompt::day(input)?)
    } else {
        None
    };

    Ok(TripFilter::new(month, day))
}

fn view_rows<R: BufRead>(input: &mut R, trips: &[Trip]) -> AppResult<()> {
    let mut pager = Pager::new();

    while prompt::confirm(input, "\nWould you like to view 5 rows of trip data? y/n")? {
        let page = pager.next_page(trips);
        if page.is_empty() {
            messages::info("No more trips to display.");
            break;
        }
        report::trips_page(page);
    }

    Ok(())
}

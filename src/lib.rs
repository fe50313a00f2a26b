//! bikestats library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (data loading, filtering, aggregation, interactive UI).

pub mod cli;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use cli::Cli;
use errors::AppResult;
use ui::prompt;

/// Entry point used by main.rs: parse the CLI once, then loop whole
/// sessions until the user declines a restart.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let data_dir = PathBuf::from(cli.data_dir.unwrap_or_else(|| ".".to_string()));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        session::run_session(&mut input, &data_dir)?;

        if !prompt::confirm(&mut input, "\nWould you like to restart? y/n")? {
            println!("\nExiting the program...");
            break;
        }
    }

    Ok(())
}

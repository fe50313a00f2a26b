use clap::Parser;

/// Command-line interface definition for bikestats
/// Interactive CLI to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: filters, travel-time and station statistics",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the city CSV files (useful for tests or custom datasets)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,
}

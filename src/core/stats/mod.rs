pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

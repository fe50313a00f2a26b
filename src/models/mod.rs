pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{Month, TripFilter};
pub use trip::Trip;

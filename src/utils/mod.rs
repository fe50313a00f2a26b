pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::secs2readable;

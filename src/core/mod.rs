pub mod filter;
pub mod mode;
pub mod pager;
pub mod stats;

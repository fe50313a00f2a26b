/// ANSI color helper constants for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

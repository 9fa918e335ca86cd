//! CLI subcommand implementations.

pub mod days;
pub mod duration;
pub mod overlap;
pub mod progress;
pub mod report;
pub mod round;
mod util;

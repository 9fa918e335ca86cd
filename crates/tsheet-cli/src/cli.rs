//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::days::DaysArgs;
use crate::commands::duration::DurationArgs;
use crate::commands::overlap::OverlapArgs;
use crate::commands::progress::ProgressArgs;
use crate::commands::report::ReportArgs;
use crate::commands::round::{RoundArgs, ShiftArgs};

/// Timesheet attendance checks.
///
/// Validates reported work segments, sums them against a target window,
/// and resolves the status shown for each day.
#[derive(Debug, Parser)]
#[command(name = "tsheet", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a start/end pair and print its duration.
    Duration(DurationArgs),

    /// Check segments for overlaps.
    Overlap(OverlapArgs),

    /// Round a time to the nearest interval.
    Round(RoundArgs),

    /// Shift a time by a number of minutes, wrapping at midnight.
    Shift(ShiftArgs),

    /// Sum time log entries and show progress toward the target window.
    Progress(ProgressArgs),

    /// Count the days in an inclusive date span.
    Days(DaysArgs),

    /// Summarize attendance records day by day.
    Report(ReportArgs),
}

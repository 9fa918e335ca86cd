//! Duration command for validating a single start/end pair.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tsheet_core::{format_duration, validate_time_range};

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Start time (HH:mm).
    pub start: String,
    /// End time (HH:mm), before midnight.
    pub end: String,
}

pub fn run<W: Write>(writer: &mut W, args: &DurationArgs) -> Result<()> {
    let range = validate_time_range(&args.start, &args.end)?;
    let minutes = range.duration_minutes();
    writeln!(
        writer,
        "{}-{}  {} ({minutes} min)",
        range.start(),
        range.end(),
        format_duration(minutes)
    )?;
    Ok(())
}

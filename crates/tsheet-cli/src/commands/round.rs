//! Round and shift commands for picker times.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tsheet_core::{add_minutes, round_to_interval};

use crate::Config;

#[derive(Debug, Args)]
pub struct RoundArgs {
    /// Time to round (HH:mm).
    pub time: String,
    /// Interval in minutes; defaults to `round_interval_minutes` from config.
    #[arg(short, long)]
    pub interval: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Time to shift (HH:mm).
    pub time: String,
    /// Minutes to add; negative values shift backward.
    #[arg(allow_negative_numbers = true)]
    pub minutes: i64,
}

pub fn run_round<W: Write>(writer: &mut W, args: &RoundArgs, config: &Config) -> Result<()> {
    let interval = args.interval.unwrap_or(config.round_interval_minutes);
    let rounded = round_to_interval(&args.time, interval)?;
    writeln!(writer, "{rounded}")?;
    Ok(())
}

pub fn run_shift<W: Write>(writer: &mut W, args: &ShiftArgs) -> Result<()> {
    let shifted = add_minutes(&args.time, args.minutes)?;
    writeln!(writer, "{shifted}")?;
    Ok(())
}

//! Days command for counting an inclusive date span.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tsheet_core::day_count;

#[derive(Debug, Args)]
pub struct DaysArgs {
    /// First day (YYYY-MM-DD).
    pub start: String,
    /// Last day (YYYY-MM-DD), inclusive.
    pub end: String,
}

pub fn run<W: Write>(writer: &mut W, args: &DaysArgs) -> Result<()> {
    writeln!(writer, "{}", day_count(&args.start, &args.end))?;
    Ok(())
}

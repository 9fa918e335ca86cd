//! Progress command for summing time log entries against a target window.
//!
//! Reads a JSON array of entries, e.g.
//! `[{"type": "duration", "durationMinutes": 240}, {"type": "range", "start": "09:00", "end": "12:00"}]`.

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tsheet_core::{
    ProgressResult, TimeLogEntry, format_duration, progress_for_window, total_duration,
};

use super::util::read_json;
use crate::Config;

#[derive(Debug, Args)]
pub struct ProgressArgs {
    /// JSON file with time log entries, or `-` for stdin.
    pub entries: PathBuf,
    /// Start of the target window; defaults to config.
    #[arg(long)]
    pub entrance: Option<String>,
    /// End of the target window; defaults to config.
    #[arg(long)]
    pub exit: Option<String>,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Formats a progress result for the terminal.
pub fn format_progress(result: &ProgressResult) -> String {
    let mut output = String::new();
    writeln!(output, "Total:    {}", format_duration(result.total_minutes)).unwrap();
    writeln!(output, "Target:   {}", format_duration(result.target_minutes)).unwrap();
    writeln!(output, "Progress: {}%", result.percentage).unwrap();
    if result.is_complete {
        writeln!(output, "Complete").unwrap();
    } else {
        writeln!(output, "Missing:  {}", format_duration(result.missing_minutes)).unwrap();
    }
    output
}

pub fn run<W: Write>(writer: &mut W, args: &ProgressArgs, config: &Config) -> Result<()> {
    let entries: Vec<TimeLogEntry> = read_json(&args.entries)?;
    let skipped = entries.iter().filter(|e| e.validate().is_err()).count();
    if skipped > 0 {
        tracing::warn!(skipped, "some entries are invalid and count as zero");
    }

    let entrance = args.entrance.as_deref().unwrap_or(&config.entrance_time);
    let exit = args.exit.as_deref().unwrap_or(&config.exit_time);
    let result = progress_for_window(total_duration(&entries), entrance, exit);

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write!(writer, "{}", format_progress(&result))?;
    }
    Ok(())
}

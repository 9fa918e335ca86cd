//! Overlap command for checking a day's segments against each other.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::Args;
use tsheet_core::{TimeRange, find_overlaps};

use super::util::parse_segment;

#[derive(Debug, Args)]
pub struct OverlapArgs {
    /// Segments as START-END (e.g., 09:00-12:00 12:00-17:00).
    #[arg(required = true, num_args = 2..)]
    pub segments: Vec<String>,
}

/// Formats the overlapping pairs, one per line.
pub fn format_overlaps(ranges: &[TimeRange]) -> String {
    let pairs = find_overlaps(ranges);
    let mut output = String::new();
    if pairs.is_empty() {
        writeln!(output, "no overlaps").unwrap();
        return output;
    }
    for (i, j) in pairs {
        let (a, b) = (&ranges[i], &ranges[j]);
        writeln!(
            output,
            "overlap: {}-{} and {}-{}",
            a.start(),
            a.end(),
            b.start(),
            b.end()
        )
        .unwrap();
    }
    output
}

pub fn run<W: Write>(writer: &mut W, args: &OverlapArgs) -> Result<()> {
    let ranges = args
        .segments
        .iter()
        .map(|segment| parse_segment(segment))
        .collect::<Result<Vec<_>>>()?;
    write!(writer, "{}", format_overlaps(&ranges))?;
    Ok(())
}

//! Shared utilities for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use tsheet_core::TimeRange;

/// Reads and parses a JSON input file, or stdin when the path is `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Parses a `HH:mm-HH:mm` segment argument.
pub fn parse_segment(text: &str) -> Result<TimeRange> {
    let Some((start, end)) = text.split_once('-') else {
        bail!("Invalid segment: {text}. Use START-END (e.g., 09:00-12:30)");
    };
    TimeRange::parse(start, end).with_context(|| format!("invalid segment {text}"))
}

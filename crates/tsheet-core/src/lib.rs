//! Attendance time validation and progress engine.
//!
//! This crate contains the pure logic behind timesheet reporting:
//! - Clock time: parsing, formatting, and `HH:mm` arithmetic
//! - Ranges: ordering and midnight checks, overlap detection
//! - Aggregation: summing duration and start/end entries
//! - Progress: completion against a target window
//! - Status: reducing a day's attendance statuses to one
//! - Calendar: inclusive day spans and weekend/missing classification
//!
//! Nothing here performs I/O. Validation functions return `Result`; summary
//! functions substitute safe defaults instead of failing.

pub mod aggregate;
pub mod calendar;
pub mod clock;
pub mod day;
pub mod progress;
pub mod range;
pub mod status;

pub use aggregate::{TimeLogEntry, total_duration};
pub use calendar::{DateSpan, DayKind, WorkWeek, classify_day, day_count};
pub use clock::{
    ClockError, ClockTime, add_minutes, compare_times, format_duration, is_in_range, normalize,
    parse_clock_time, parse_picker_time, round_to_interval,
};
pub use day::{AttendanceRecord, DaySummary, summarize_day, summarize_span};
pub use progress::{ProgressResult, progress, progress_for_window, target_duration};
pub use range::{
    RangeError, TimeRange, calculate_duration_minutes, find_overlaps, time_ranges_overlap,
    validate_no_midnight_crossing, validate_order, validate_time_range,
};
pub use status::{
    AttendanceStatus, ResolveContext, ResolvedStatus, UnknownStatus, resolve_raw_statuses,
    resolve_status,
};

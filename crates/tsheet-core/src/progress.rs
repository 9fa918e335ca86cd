//! Completion progress against a day's target window.

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// How far a day's reported time is from its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResult {
    pub total_minutes: i64,
    pub target_minutes: i64,
    /// Rounded share of the target, capped at 100.
    pub percentage: u8,
    pub is_complete: bool,
    /// Zero once complete.
    pub missing_minutes: i64,
}

/// Target minutes for an entrance/exit pair.
///
/// Returns 0 when the pair does not form a valid range, so callers always
/// get a usable target.
pub fn target_duration(entrance_time: &str, exit_time: &str) -> i64 {
    match TimeRange::parse(entrance_time, exit_time) {
        Ok(window) => window.duration_minutes(),
        Err(err) => {
            tracing::debug!(entrance_time, exit_time, error = %err, "no usable target window");
            0
        }
    }
}

/// Computes progress of `total` minutes toward `target` minutes.
pub fn progress(total: i64, target: i64) -> ProgressResult {
    let is_complete = total >= target;
    ProgressResult {
        total_minutes: total,
        target_minutes: target,
        percentage: percentage(total, target),
        is_complete,
        missing_minutes: if is_complete { 0 } else { target - total },
    }
}

/// Progress of `total` minutes toward an entrance/exit window.
pub fn progress_for_window(total: i64, entrance_time: &str, exit_time: &str) -> ProgressResult {
    progress(total, target_duration(entrance_time, exit_time))
}

fn percentage(total: i64, target: i64) -> u8 {
    if target <= 0 {
        return 0;
    }
    let total = i128::from(total);
    let target = i128::from(target);
    // Half-up rounding of total * 100 / target.
    let rounded = (total * 200 + target).div_euclid(2 * target);
    u8::try_from(rounded.clamp(0, 100)).unwrap_or(100)
}

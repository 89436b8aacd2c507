//! Visible time-range derivation.
//!
//! The timetable grid shows a vertical minute range. In auto mode that
//! range follows the selected courses: earliest start minus a pad to
//! latest end plus a pad, clamped to the day. With nothing to scan the
//! caller's fallback is returned unchanged.

use serde::{Deserialize, Serialize};

use crate::models::{format_minutes, Course, Semester, TimeOfDay, MINUTES_PER_DAY};

/// Pad applied on both sides of the derived range, in minutes.
pub const RANGE_PAD_MIN: u16 = 30;

/// A visible minute range `[min, max]` within one day.
///
/// Bounds are raw minutes since midnight rather than [`TimeOfDay`]: the
/// padded upper bound may legitimately reach the full-day value 1440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Lower bound (minutes since midnight).
    pub min: u16,
    /// Upper bound (minutes since midnight, at most 1440).
    pub max: u16,
}

impl Default for TimeRange {
    /// The stock 08:00-20:00 window.
    fn default() -> Self {
        Self {
            min: 8 * 60,
            max: 20 * 60,
        }
    }
}

impl TimeRange {
    /// Creates a range from raw minutes.
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Creates a range from wall-clock bounds.
    pub fn from_times(min: TimeOfDay, max: TimeOfDay) -> Self {
        Self {
            min: min.minutes(),
            max: max.minutes(),
        }
    }

    /// Lower bound as `HH:MM`.
    pub fn min_label(&self) -> String {
        format_minutes(self.min)
    }

    /// Upper bound as `HH:MM` (`"24:00"` at the day boundary).
    pub fn max_label(&self) -> String {
        format_minutes(self.max)
    }
}

/// Derives the default visible range from a set of courses.
///
/// Scans every slot of every event restricted to `semester`, tracking the
/// minimum start and maximum end. No matching slot returns `fallback`
/// unchanged; otherwise both bounds are padded by [`RANGE_PAD_MIN`] and
/// clamped to `[0, 1440]`.
///
/// Pure function of its inputs — recompute freely whenever the selection
/// or semester changes.
pub fn derive_range<'a, I>(courses: I, semester: Semester, fallback: TimeRange) -> TimeRange
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut min: Option<u16> = None;
    let mut max: Option<u16> = None;

    for course in courses {
        for event in &course.events {
            for slot in &event.time_slots {
                if slot.semester != semester {
                    continue;
                }
                let from = slot.from.minutes();
                let to = slot.to.minutes();
                min = Some(min.map_or(from, |m| m.min(from)));
                max = Some(max.map_or(to, |m| m.max(to)));
            }
        }
    }

    match (min, max) {
        (Some(min), Some(max)) => TimeRange {
            min: min.saturating_sub(RANGE_PAD_MIN),
            max: (max + RANGE_PAD_MIN).min(MINUTES_PER_DAY),
        },
        _ => fallback,
    }
}

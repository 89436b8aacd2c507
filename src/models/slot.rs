//! Weekday, semester, and weekly time-slot models.
//!
//! A `TimeSlot` is one weekly occurrence of a course event: a weekday plus
//! a half-open wall-clock interval, tagged with the semester it runs in.
//!
//! # Semester Partition
//! The semester tag partitions the slot space. Conflict and range
//! computations are always evaluated within a single semester; slots tagged
//! with the other one are invisible to them. `TimeSlot::overlaps` itself
//! does NOT compare semesters — callers pre-filter.

use serde::{Deserialize, Serialize};

use super::time::{intervals_overlap, TimeOfDay};

/// Day of the week.
///
/// Declaration order (Sunday first) is fixed and defines both `Ord` and the
/// iteration order of any day-indexed structure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All days in canonical order.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Position in the canonical week (Sunday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Semester tag. Exactly one semester is active for conflict purposes
/// at any time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Semester {
    #[default]
    A,
    B,
}

/// A single weekly occurrence: `[from, to)` on `day` during `semester`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Weekday this slot occurs on.
    pub day: Day,
    /// Start of the slot (inclusive).
    pub from: TimeOfDay,
    /// End of the slot (exclusive).
    pub to: TimeOfDay,
    /// Semester the slot runs in.
    pub semester: Semester,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: Day, from: TimeOfDay, to: TimeOfDay, semester: Semester) -> Self {
        Self {
            day,
            from,
            to,
            semester,
        }
    }

    /// Slot length in minutes. Zero for degenerate slots (`from >= to`).
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.to.minutes().saturating_sub(self.from.minutes())
    }

    /// Whether this slot overlaps another in time.
    ///
    /// Slots on different days never overlap. Semester is not compared.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        if self.day != other.day {
            return false;
        }
        intervals_overlap(
            self.from.minutes(),
            self.to.minutes(),
            other.from.minutes(),
            other.to.minutes(),
        )
    }
}

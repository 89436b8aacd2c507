//! Timetable domain models.
//!
//! Core data types for the scheduling engine: wall-clock times, weekly
//! slots, the course catalog, and the assignment map that represents the
//! user's current timetable.
//!
//! All catalog types are immutable snapshots from the engine's point of
//! view: they are supplied externally, replaced wholesale on reload, and
//! never mutated by any engine operation.

mod assignment;
mod course;
mod slot;
mod time;

pub use assignment::{AssignmentMap, ScheduleStatus};
pub use course::{Catalog, Course, CourseEvent};
pub use slot::{Day, Semester, TimeSlot};
pub use time::{format_minutes, intervals_overlap, ParseError, TimeOfDay, MINUTES_PER_DAY};

//! Course timetable scheduling core.
//!
//! Lets a caller pick a subset of courses, each offering categorized
//! events with weekly time slots, and assign at most one event per
//! category per course into a personal weekly timetable — while
//! preventing time overlaps. Rendering, persistence, and routing live
//! outside; this crate is the conflict and layout engine they call into.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeOfDay`, `Day`, `Semester`,
//!   `TimeSlot`, `Course`, `CourseEvent`, `Catalog`, `AssignmentMap`
//! - **`conflict`**: Overlap checking, assignment eligibility, course
//!   status, and the blocked predicate
//! - **`range`**: Default visible time-range derivation
//! - **`layout`**: Interval-packing layout (first-fit coloring + cluster
//!   sweep) for same-day overlapping items
//! - **`label`**: Letter labels for selected courses
//! - **`validation`**: Catalog ingestion checks (duplicate IDs, empty
//!   categories, degenerate slots)
//! - **`store`**: In-memory state holder with snapshot discipline
//!
//! # Architecture
//!
//! Engine functions are synchronous and pure: they take immutable
//! snapshots (catalog, assignment map, semester), allocate fresh outputs,
//! and never hold state between calls. The only mutable piece is
//! [`store::ScheduleState`], the single writer sitting between the engine
//! and whatever presentation layer consumes it.
//!
//! # Reference
//!
//! - Kolen et al. (2007), "Interval scheduling: A survey"
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs",
//!   Ch. 8 (interval-graph coloring)

pub mod conflict;
pub mod label;
pub mod layout;
pub mod models;
pub mod range;
pub mod store;
pub mod validation;

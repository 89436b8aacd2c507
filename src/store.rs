//! In-memory schedule state holder.
//!
//! Owns the loaded catalog, the selected-course list, the assignment map,
//! the active semester, and the visible-range setting. Engine functions
//! ([`crate::conflict`], [`crate::range`]) stay pure; this is the single
//! writer that mutates state between their calls.
//!
//! # Snapshot Discipline
//! Mutations go through `&mut self` actions; every query borrows `&self`
//! and re-derives its answer from current state. Callers needing atomic
//! check-then-assign use [`ScheduleState::try_schedule_event`] on their
//! single-threaded update path — the engine itself holds no state between
//! calls and places no locking requirement.
//!
//! Persistence is an external concern: the whole state serializes with
//! serde, and whoever stores it decides the format.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::conflict::{can_assign, course_status, find_event_owner, is_blocked, scheduled_events};
use crate::label::index_to_letters;
use crate::models::{
    AssignmentMap, Catalog, Course, CourseEvent, ScheduleStatus, Semester,
};
use crate::range::{derive_range, TimeRange};

/// Visible-range setting: the stored bounds plus the auto flag.
///
/// In auto mode the effective range follows the selection (see
/// [`ScheduleState::visible_range`]); a manual override passes through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSetting {
    /// Stored bounds, used verbatim when `auto` is off.
    pub range: TimeRange,
    /// Whether the range follows the selected courses.
    pub auto: bool,
}

impl Default for RangeSetting {
    fn default() -> Self {
        Self {
            range: TimeRange::default(),
            auto: true,
        }
    }
}

/// The user's scheduling session: catalog, selection, assignments,
/// semester, and range setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleState {
    courses: Vec<Course>,
    /// Selected course ids in selection order (drives letter labels).
    selected: Vec<String>,
    assignments: AssignmentMap,
    semester: Semester,
    range: RangeSetting,
}

impl ScheduleState {
    /// Creates an empty session (semester A, auto 08:00-20:00 range).
    pub fn new() -> Self {
        Self::default()
    }

    // ----- catalog -----

    /// Replaces the catalog wholesale. Selection and assignments are
    /// cleared; the range setting survives the reload.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        debug!("loading catalog with {} courses", catalog.courses.len());
        self.courses = catalog.courses;
        self.selected.clear();
        self.assignments.clear();
    }

    /// Drops the catalog together with selection and assignments.
    pub fn clear_catalog(&mut self) {
        self.courses.clear();
        self.selected.clear();
        self.assignments.clear();
    }

    /// The loaded courses.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    // ----- semester -----

    /// The active semester.
    pub fn semester(&self) -> Semester {
        self.semester
    }

    /// Switches the active semester.
    pub fn set_semester(&mut self, semester: Semester) {
        self.semester = semester;
    }

    // ----- selection -----

    /// Selected course ids in selection order.
    pub fn selected_course_ids(&self) -> &[String] {
        &self.selected
    }

    /// Whether a course is selected.
    pub fn is_selected(&self, course_id: &str) -> bool {
        self.selected.iter().any(|id| id == course_id)
    }

    /// Selects or deselects a course. Deselecting drops the course's
    /// assignments.
    pub fn toggle_course(&mut self, course_id: &str) {
        if let Some(pos) = self.selected.iter().position(|id| id == course_id) {
            self.selected.remove(pos);
            self.assignments.remove_course(course_id);
        } else if self.courses.iter().any(|c| c.id == course_id) {
            self.selected.push(course_id.to_string());
        } else {
            warn!("toggle_course: unknown course id {course_id:?}");
        }
    }

    /// Selects every loaded course.
    pub fn select_all(&mut self) {
        self.selected = self.courses.iter().map(|c| c.id.clone()).collect();
    }

    /// Deselects everything. Assignments are kept; deselect via
    /// [`toggle_course`] to drop a course's assignments with it.
    ///
    /// [`toggle_course`]: ScheduleState::toggle_course
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected courses in catalog order.
    pub fn selected_courses(&self) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| self.is_selected(&c.id))
            .collect()
    }

    /// Letter label of a selected course ("A", "B", ..., "AA", ...),
    /// by selection order. `None` for unselected courses.
    pub fn course_label(&self, course_id: &str) -> Option<String> {
        self.selected
            .iter()
            .position(|id| id == course_id)
            .map(index_to_letters)
    }

    // ----- assignments -----

    /// The current assignment map snapshot.
    pub fn assignments(&self) -> &AssignmentMap {
        &self.assignments
    }

    /// Records an assignment for the event's course and category without
    /// an eligibility check.
    ///
    /// The event must resolve against the catalog — an unresolvable id is
    /// refused (and logged) to keep the map invariant intact. Returns
    /// whether the assignment was recorded.
    pub fn schedule_event(&mut self, event_id: &str) -> bool {
        let Some((course, event)) = find_event_owner(&self.courses, event_id) else {
            warn!("schedule_event: no course owns event {event_id:?}");
            return false;
        };
        let (course_id, category) = (course.id.clone(), event.category.clone());
        self.assignments.assign(course_id, category, event_id);
        true
    }

    /// Eligibility-gated assignment: records the event only if
    /// [`can_assign`] accepts it under the current map.
    ///
    /// This is the check-then-assign path; keep it on a single-threaded
    /// update path for atomicity.
    pub fn try_schedule_event(&mut self, event_id: &str) -> bool {
        let Some((_, event)) = find_event_owner(&self.courses, event_id) else {
            warn!("try_schedule_event: no course owns event {event_id:?}");
            return false;
        };
        if !can_assign(event, &self.assignments, &self.courses, self.semester) {
            debug!("try_schedule_event: {event_id:?} is not eligible");
            return false;
        }
        self.schedule_event(event_id)
    }

    /// Removes one assignment, returning the event id that was there.
    pub fn unschedule_event(&mut self, course_id: &str, category: &str) -> Option<String> {
        self.assignments.unassign(course_id, category)
    }

    /// Clears every assignment, keeping catalog and selection.
    pub fn reset_all(&mut self) {
        debug!("resetting all assignments");
        self.assignments.clear();
    }

    /// Resolves all assignments to (course, event) pairs, skipping stale
    /// entries, in catalog order.
    pub fn scheduled_events(&self) -> Vec<(&Course, &CourseEvent)> {
        scheduled_events(&self.assignments, &self.courses)
    }

    // ----- derived queries -----

    /// Whether the event may be newly assigned under the current map.
    pub fn can_assign_event(&self, event_id: &str) -> bool {
        find_event_owner(&self.courses, event_id)
            .map(|(_, event)| can_assign(event, &self.assignments, &self.courses, self.semester))
            .unwrap_or(false)
    }

    /// Schedule status of a course, `None` for unknown ids.
    pub fn course_status(&self, course_id: &str) -> Option<ScheduleStatus> {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .map(|c| course_status(c, &self.assignments))
    }

    /// Whether a selected course can no longer be completed under the
    /// current assignments. Unselected and unknown courses are never
    /// blocked.
    pub fn is_course_blocked(&self, course_id: &str) -> bool {
        if !self.is_selected(course_id) {
            return false;
        }
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .is_some_and(|c| is_blocked(c, &self.assignments, &self.courses, self.semester))
    }

    // ----- visible range -----

    /// The stored range setting.
    pub fn range_setting(&self) -> RangeSetting {
        self.range
    }

    /// Overrides the stored bounds (takes effect when auto is off).
    pub fn set_range(&mut self, range: TimeRange) {
        self.range.range = range;
    }

    /// Turns auto range derivation on or off.
    pub fn set_range_auto(&mut self, auto: bool) {
        self.range.auto = auto;
    }

    /// The effective visible range.
    ///
    /// Manual mode and an empty selection both return the stored bounds
    /// unchanged; otherwise the range is derived fresh from the selected
    /// courses in the active semester.
    pub fn visible_range(&self) -> TimeRange {
        if !self.range.auto {
            return self.range.range;
        }
        let selected = self.selected_courses();
        if selected.is_empty() {
            return self.range.range;
        }
        derive_range(selected, self.semester, TimeRange::default())
    }
}

//! Assignment map: the user's current timetable.
//!
//! Maps course id → category → chosen event id. The map is owned by the
//! state holder; engine functions receive it as an immutable snapshot and
//! return fresh derived values — they never mutate it.
//!
//! # Invariant
//! Every (course, category, event) entry resolves to an event that exists
//! under that course and carries that category. The state holder maintains
//! this; engine readers tolerate breakage by silently skipping entries that
//! no longer resolve (stale ids after a catalog reload).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Mapping course id → category → assigned event id.
///
/// Serializes transparently as the nested string map, matching the
/// external persisted shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentMap {
    entries: HashMap<String, HashMap<String, String>>,
}

impl AssignmentMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no assignments exist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (course, category) assignments.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// The event assigned for a course's category, if any.
    pub fn get(&self, course_id: &str, category: &str) -> Option<&str> {
        self.entries
            .get(course_id)?
            .get(category)
            .map(String::as_str)
    }

    /// Iterates the (category, event id) pairs assigned for one course.
    pub fn assigned_categories<'a>(
        &'a self,
        course_id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.entries
            .get(course_id)
            .into_iter()
            .flatten()
            .map(|(cat, ev)| (cat.as_str(), ev.as_str()))
    }

    /// Iterates every (course id, category, event id) triple.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.entries.iter().flat_map(|(course, cats)| {
            cats.iter()
                .map(move |(cat, ev)| (course.as_str(), cat.as_str(), ev.as_str()))
        })
    }

    /// The set of all assigned event ids.
    pub fn assigned_event_ids(&self) -> HashSet<&str> {
        self.entries
            .values()
            .flat_map(|cats| cats.values().map(String::as_str))
            .collect()
    }

    /// Records an assignment, replacing any previous event in that
    /// course/category cell.
    pub fn assign(
        &mut self,
        course_id: impl Into<String>,
        category: impl Into<String>,
        event_id: impl Into<String>,
    ) {
        self.entries
            .entry(course_id.into())
            .or_default()
            .insert(category.into(), event_id.into());
    }

    /// Removes one assignment, returning the event id that was there.
    ///
    /// Dropping the last category of a course drops the course key too.
    pub fn unassign(&mut self, course_id: &str, category: &str) -> Option<String> {
        let cats = self.entries.get_mut(course_id)?;
        let removed = cats.remove(category);
        if cats.is_empty() {
            self.entries.remove(course_id);
        }
        removed
    }

    /// Removes every assignment of a course (course deselection).
    pub fn remove_course(&mut self, course_id: &str) {
        self.entries.remove(course_id);
    }

    /// Removes all assignments.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// How far along a course's schedule is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// No category of the course is assigned.
    None,
    /// Some, but not all, categories are assigned.
    Partial,
    /// Every distinct category among the course's events is assigned.
    Full,
}

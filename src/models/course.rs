//! Course catalog models.
//!
//! A `Course` owns its offered events; a `CourseEvent` belongs to exactly
//! one category (e.g. "lecture", "lab") and owns its weekly time slots.
//! Multiple events may share a category — those are alternative sections,
//! of which at most one may be assigned per course.
//!
//! Catalog data is immutable and externally supplied: it is replaced
//! wholesale on reload, never patched in place.

use serde::{Deserialize, Serialize};

use super::slot::TimeSlot;

/// An identifiable offering within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEvent {
    /// Stable event identifier, unique across the catalog.
    pub id: String,
    /// Category tag ("lecture", "lab", ...). At most one event per
    /// category may be assigned per course.
    pub category: String,
    /// Teaching staff names.
    pub lecturers: Vec<String>,
    /// Room / building label.
    pub location: String,
    /// Weekly occurrences. Non-empty for well-formed catalogs.
    pub time_slots: Vec<TimeSlot>,
}

impl CourseEvent {
    /// Creates a new event.
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            lecturers: Vec::new(),
            location: String::new(),
            time_slots: Vec::new(),
        }
    }

    /// Adds a lecturer.
    pub fn with_lecturer(mut self, lecturer: impl Into<String>) -> Self {
        self.lecturers.push(lecturer.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Adds a weekly time slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }
}

/// A course: the unit of selection, owning its offered events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Offered events.
    pub events: Vec<CourseEvent>,
}

impl Course {
    /// Creates a new course.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            events: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an event.
    pub fn with_event(mut self, event: CourseEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Looks up an event of this course by id.
    pub fn event(&self, event_id: &str) -> Option<&CourseEvent> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Distinct categories among this course's events, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut cats: Vec<&str> = self.events.iter().map(|e| e.category.as_str()).collect();
        cats.sort_unstable();
        cats.dedup();
        cats
    }

    /// Events belonging to the given category (alternative sections).
    pub fn events_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CourseEvent> + 'a {
        self.events.iter().filter(move |e| e.category == category)
    }
}

/// The external catalog-file shape: a list of courses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// All loaded courses.
    pub courses: Vec<Course>,
}

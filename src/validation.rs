//! Catalog ingestion checks.
//!
//! Checks structural integrity of an uploaded course catalog before it
//! reaches the scheduling engine. Detects:
//! - Duplicate course and event IDs
//! - Courses with no events
//! - Events with an empty category
//! - Events with no time slots
//! - Slots whose start is not before their end
//!
//! Degenerate slots are rejected here rather than inside the engine: the
//! conflict and layout code tolerates them (they overlap nothing and lay
//! out as zero-height geometry), but a well-formed catalog never carries
//! them.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses or two events share the same ID.
    DuplicateId,
    /// A course has no events.
    EmptyCourse,
    /// An event has an empty category tag.
    MissingCategory,
    /// An event has no time slots.
    NoTimeSlots,
    /// A slot's start is not strictly before its end.
    InvalidSlotBounds,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate event IDs (across all courses)
/// 3. All courses have at least one event
/// 4. All events carry a non-empty category
/// 5. All events have at least one time slot
/// 6. All slots satisfy `from < to`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    let mut event_ids = HashSet::new();

    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.events.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no events", course.id),
            ));
        }

        for event in &course.events {
            if !event_ids.insert(event.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate event ID: {}", event.id),
                ));
            }

            if event.category.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingCategory,
                    format!("Event '{}' has an empty category", event.id),
                ));
            }

            if event.time_slots.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoTimeSlots,
                    format!("Event '{}' has no time slots", event.id),
                ));
            }

            for slot in &event.time_slots {
                if slot.from >= slot.to {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidSlotBounds,
                        format!(
                            "Event '{}' has a slot ending at or before its start ({} >= {})",
                            event.id, slot.from, slot.to
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

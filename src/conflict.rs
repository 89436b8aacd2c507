//! Conflict checking and assignment eligibility.
//!
//! # Algorithm
//!
//! Two events conflict when any cross-pair of their slots, restricted to
//! the active semester, overlaps on the same day. Eligibility for a
//! candidate event checks its category cell is still free and that it
//! conflicts with nothing currently assigned.
//!
//! Every query re-derives its answer from the assignment-map snapshot
//! passed in at call time. Nothing is cached: the map can change between
//! calls, and staleness would silently let conflicting events through.
//!
//! # Complexity
//! `events_overlap` is O(n·m) over the two slot lists (typically <= 3 slots
//! per event); `can_assign` is linear in the number of current assignments
//! times that.

use std::collections::HashSet;

use crate::models::{AssignmentMap, Course, CourseEvent, ScheduleStatus, Semester, TimeSlot};

/// Whether two events conflict within a semester.
///
/// Both slot lists are filtered to `semester` first; the result is an
/// existential OR over the cross product of the filtered lists. Slots
/// tagged with the other semester are invisible here.
pub fn events_overlap(a: &[TimeSlot], b: &[TimeSlot], semester: Semester) -> bool {
    a.iter()
        .filter(|s| s.semester == semester)
        .any(|s| {
            b.iter()
                .filter(|o| o.semester == semester)
                .any(|o| s.overlaps(o))
        })
}

/// Finds the course owning an event, by event id.
pub fn find_event_owner<'a>(
    courses: &'a [Course],
    event_id: &str,
) -> Option<(&'a Course, &'a CourseEvent)> {
    courses
        .iter()
        .find_map(|c| c.event(event_id).map(|e| (c, e)))
}

/// Resolves every assignment-map entry to its course and event.
///
/// Entries whose course or event no longer exists in the catalog (stale
/// ids after a reload) are silently skipped. Output follows catalog order,
/// so the result is deterministic regardless of map iteration order.
pub fn scheduled_events<'a>(
    assignments: &AssignmentMap,
    courses: &'a [Course],
) -> Vec<(&'a Course, &'a CourseEvent)> {
    let mut resolved = Vec::new();
    for course in courses {
        for (_, event_id) in assignments.assigned_categories(&course.id) {
            if let Some(event) = course.event(event_id) {
                resolved.push((course, event));
            }
        }
    }
    resolved
}

/// Whether a candidate event may be newly assigned.
///
/// Returns `false` when:
/// - no course in the catalog owns the candidate (caller-side data
///   mismatch — defensive, never panics);
/// - the owning course already has an event assigned for the candidate's
///   category (re-assigning requires an explicit unassign first);
/// - the candidate overlaps any currently assigned event in `semester`.
pub fn can_assign(
    candidate: &CourseEvent,
    assignments: &AssignmentMap,
    courses: &[Course],
    semester: Semester,
) -> bool {
    let Some((course, _)) = find_event_owner(courses, &candidate.id) else {
        return false;
    };
    if assignments.get(&course.id, &candidate.category).is_some() {
        return false;
    }
    !scheduled_events(assignments, courses)
        .iter()
        .any(|(_, event)| events_overlap(&candidate.time_slots, &event.time_slots, semester))
}

/// Classifies how far along a course's schedule is.
///
/// `Full` means every distinct category among the course's events has an
/// assignment; `None` means no category does.
pub fn course_status(course: &Course, assignments: &AssignmentMap) -> ScheduleStatus {
    let assigned = assignments.assigned_categories(&course.id).count();
    if assigned == 0 {
        ScheduleStatus::None
    } else if assigned == course.categories().len() {
        ScheduleStatus::Full
    } else {
        ScheduleStatus::Partial
    }
}

/// Whether a not-yet-fully-scheduled course can no longer be completed
/// under the current assignments.
///
/// True when at least one still-open category of the course has zero
/// events passing [`can_assign`]. This considers only the current map —
/// unassigning an unrelated event elsewhere might free capacity, so the
/// predicate can report blocked prematurely. Documented behavior.
pub fn is_blocked(
    course: &Course,
    assignments: &AssignmentMap,
    courses: &[Course],
    semester: Semester,
) -> bool {
    let assigned: HashSet<&str> = assignments
        .assigned_categories(&course.id)
        .map(|(cat, _)| cat)
        .collect();
    let open: Vec<&str> = course
        .categories()
        .into_iter()
        .filter(|cat| !assigned.contains(cat))
        .collect();
    if open.is_empty() {
        return false;
    }
    open.into_iter().any(|cat| {
        course
            .events_in_category(cat)
            .all(|event| !can_assign(event, assignments, courses, semester))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, TimeOfDay, TimeSlot};

    fn slot(day: Day, from: &str, to: &str, semester: Semester) -> TimeSlot {
        TimeSlot::new(
            day,
            from.parse::<TimeOfDay>().unwrap(),
            to.parse::<TimeOfDay>().unwrap(),
            semester,
        )
    }

    /// Two courses: cs101 with two alternative lectures and a lab, math1
    /// with a single lecture overlapping cs101's first lecture.
    fn sample_catalog() -> Vec<Course> {
        vec![
            Course::new("cs101")
                .with_name("Intro to CS")
                .with_event(
                    CourseEvent::new("cs101-lec-1", "lecture")
                        .with_slot(slot(Day::Monday, "10:00", "12:00", Semester::A)),
                )
                .with_event(
                    CourseEvent::new("cs101-lec-2", "lecture")
                        .with_slot(slot(Day::Wednesday, "10:00", "12:00", Semester::A)),
                )
                .with_event(
                    CourseEvent::new("cs101-lab-1", "lab")
                        .with_slot(slot(Day::Monday, "12:00", "14:00", Semester::A)),
                ),
            Course::new("math1")
                .with_name("Calculus")
                .with_event(
                    CourseEvent::new("math1-lec-1", "lecture")
                        .with_slot(slot(Day::Monday, "11:00", "13:00", Semester::A)),
                ),
        ]
    }

    fn event<'a>(courses: &'a [Course], id: &str) -> &'a CourseEvent {
        find_event_owner(courses, id).unwrap().1
    }

    #[test]
    fn test_events_overlap_cross_pairs() {
        let a = [
            slot(Day::Monday, "08:00", "09:00", Semester::A),
            slot(Day::Tuesday, "10:00", "12:00", Semester::A),
        ];
        let b = [
            slot(Day::Tuesday, "11:00", "13:00", Semester::A),
            slot(Day::Friday, "08:00", "09:00", Semester::A),
        ];
        assert!(events_overlap(&a, &b, Semester::A));
        assert!(events_overlap(&b, &a, Semester::A));
    }

    #[test]
    fn test_events_overlap_other_semester_invisible() {
        let a = [slot(Day::Monday, "10:00", "12:00", Semester::B)];
        let b = [slot(Day::Monday, "10:00", "12:00", Semester::B)];
        assert!(events_overlap(&a, &b, Semester::B));
        assert!(!events_overlap(&a, &b, Semester::A));
    }

    #[test]
    fn test_can_assign_empty_map() {
        let courses = sample_catalog();
        let assignments = AssignmentMap::new();
        for id in ["cs101-lec-1", "cs101-lec-2", "cs101-lab-1", "math1-lec-1"] {
            assert!(
                can_assign(event(&courses, id), &assignments, &courses, Semester::A),
                "{id} should be eligible on an empty map"
            );
        }
    }

    #[test]
    fn test_can_assign_category_taken() {
        let courses = sample_catalog();
        let mut assignments = AssignmentMap::new();
        assignments.assign("cs101", "lecture", "cs101-lec-1");

        // Same category, no time conflict (Wednesday vs Monday) — still refused
        assert!(!can_assign(
            event(&courses, "cs101-lec-2"),
            &assignments,
            &courses,
            Semester::A
        ));
    }

    #[test]
    fn test_can_assign_time_conflict() {
        let courses = sample_catalog();
        let mut assignments = AssignmentMap::new();
        assignments.assign("cs101", "lecture", "cs101-lec-1");

        // math1 lecture overlaps cs101-lec-1 on Monday 11:00-12:00
        assert!(!can_assign(
            event(&courses, "math1-lec-1"),
            &assignments,
            &courses,
            Semester::A
        ));
        // Back-to-back lab (12:00 start against 12:00 end) is fine
        assert!(can_assign(
            event(&courses, "cs101-lab-1"),
            &assignments,
            &courses,
            Semester::A
        ));
    }

    #[test]
    fn test_can_assign_orphaned_event() {
        let courses = sample_catalog();
        let assignments = AssignmentMap::new();
        let orphan = CourseEvent::new("ghost", "lecture")
            .with_slot(slot(Day::Monday, "08:00", "09:00", Semester::A));
        assert!(!can_assign(&orphan, &assignments, &courses, Semester::A));
    }

    #[test]
    fn test_can_assign_skips_stale_entries() {
        let courses = sample_catalog();
        let mut assignments = AssignmentMap::new();
        // Stale course and stale event id: both silently ignored
        assignments.assign("gone-course", "lecture", "gone-lec");
        assignments.assign("math1", "lecture", "math1-lec-99");

        assert!(can_assign(
            event(&courses, "cs101-lec-1"),
            &assignments,
            &courses,
            Semester::A
        ));
    }

    #[test]
    fn test_scheduled_events_resolution() {
        let courses = sample_catalog();
        let mut assignments = AssignmentMap::new();
        assignments.assign("cs101", "lecture", "cs101-lec-1");
        assignments.assign("math1", "lecture", "stale-id");

        let resolved = scheduled_events(&assignments, &courses);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.id, "cs101");
        assert_eq!(resolved[0].1.id, "cs101-lec-1");
    }

    #[test]
    fn test_course_status() {
        let courses = sample_catalog();
        let cs101 = &courses[0];
        let mut assignments = AssignmentMap::new();

        assert_eq!(course_status(cs101, &assignments), ScheduleStatus::None);

        assignments.assign("cs101", "lecture", "cs101-lec-1");
        assert_eq!(course_status(cs101, &assignments), ScheduleStatus::Partial);

        assignments.assign("cs101", "lab", "cs101-lab-1");
        assert_eq!(course_status(cs101, &assignments), ScheduleStatus::Full);
    }

    #[test]
    fn test_is_blocked() {
        let courses = sample_catalog();
        let math1 = &courses[1];
        let mut assignments = AssignmentMap::new();

        assert!(!is_blocked(math1, &assignments, &courses, Semester::A));

        // cs101's Monday lecture shadows math1's only lecture slot
        assignments.assign("cs101", "lecture", "cs101-lec-1");
        assert!(is_blocked(math1, &assignments, &courses, Semester::A));

        // The shadow lives in semester A only
        assert!(!is_blocked(math1, &assignments, &courses, Semester::B));
    }

    #[test]
    fn test_is_blocked_full_course() {
        let courses = sample_catalog();
        let math1 = &courses[1];
        let mut assignments = AssignmentMap::new();
        assignments.assign("math1", "lecture", "math1-lec-1");

        // Fully scheduled course is never blocked
        assert!(!is_blocked(math1, &assignments, &courses, Semester::A));
    }
}

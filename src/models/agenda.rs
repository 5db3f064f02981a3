//! Conversion from stored agenda records to occupied intervals.
//!
//! Stored records are lenient by design: legacy frontend data carried events
//! with an `all_day` flag, a timed pair, or neither. This module is the one
//! place where that shape is narrowed to the tagged [`OccupiedInterval`]
//! form. Records that cannot be narrowed are logged and skipped so that one
//! bad row never turns a guide's availability query into an error.

use tracing::warn;

use crate::api::{EventRecord, IntervalSource, OccupiedInterval, TourAssignment};

/// Narrow a stored personal event to an occupied interval.
///
/// Returns `None` (after logging) for records that are not all-day and are
/// missing a timestamp, and for degenerate timed pairs with `start >= end`.
pub fn event_to_interval(event: &EventRecord) -> Option<OccupiedInterval> {
    if event.all_day {
        return Some(OccupiedInterval::all_day(
            event.title.clone(),
            IntervalSource::Personal,
        ));
    }

    match (event.start, event.end) {
        (Some(start), Some(end)) if start < end => Some(OccupiedInterval::timed(
            start,
            end,
            event.title.clone(),
            IntervalSource::Personal,
        )),
        (Some(start), Some(end)) => {
            warn!(
                event_id = %event.id,
                guide_id = %event.guide_id,
                %start,
                %end,
                "skipping event with inverted time range"
            );
            None
        }
        _ => {
            warn!(
                event_id = %event.id,
                guide_id = %event.guide_id,
                "skipping event with missing timestamps (not marked all-day)"
            );
            None
        }
    }
}

/// Narrow a tour assignment to an occupied interval.
///
/// Assignments always carry a timed pair; a degenerate pair is still logged
/// and skipped rather than failing the query.
pub fn assignment_to_interval(assignment: &TourAssignment) -> Option<OccupiedInterval> {
    if assignment.start < assignment.end {
        Some(OccupiedInterval::timed(
            assignment.start,
            assignment.end,
            assignment.tour_name.clone(),
            IntervalSource::AssignedTour,
        ))
    } else {
        warn!(
            assignment_id = %assignment.id,
            guide_id = %assignment.guide_id,
            start = %assignment.start,
            end = %assignment.end,
            "skipping assignment with inverted time range"
        );
        None
    }
}

/// Collect the occupied intervals for one guide-date from both sources.
///
/// Personal events and assigned tours are merged with no precedence rule;
/// downstream slot computation resolves overlap purely by time order. The
/// `source` tag is preserved on each interval.
pub fn collect_intervals(
    events: &[EventRecord],
    assignments: &[TourAssignment],
) -> Vec<OccupiedInterval> {
    events
        .iter()
        .filter_map(event_to_interval)
        .chain(assignments.iter().filter_map(assignment_to_interval))
        .collect()
}

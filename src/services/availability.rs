//! Free-slot computation service.
//!
//! Subtracts a day's occupied intervals from the guide's working window,
//! yielding the bookable slots of at least a minimum duration. This is the
//! core of the booking flow: the agenda screens and the marketplace both ask
//! "when can this guide take another tour?" through this function.

use crate::api::{BusySpan, DaySchedule, FreeSlot, OccupiedInterval, TimeOfDay};

/// Default minimum bookable slot length in minutes.
pub const DEFAULT_MIN_SLOT_MINUTES: u32 = 60;

/// Compute the bookable free slots for one guide-day.
///
/// The computation is a single left-to-right sweep:
///
/// 1. A disabled day (or an inverted working window) yields no slots.
/// 2. Any all-day interval consumes the whole day.
/// 3. Timed intervals are sorted by start, ties by end (stable), and walked
///    with a cursor starting at the window start. Gaps ahead of the cursor
///    become candidate slots; the cursor advance merges overlapping and
///    back-to-back intervals so negative-length candidates cannot occur.
/// 4. Candidates shorter than `min_duration_minutes` are dropped; a slot of
///    exactly the minimum is kept.
///
/// Anomalous input degrades to fewer or zero slots; the function never
/// fails. It is pure and safe to call concurrently.
pub fn compute_free_slots(
    day: &DaySchedule,
    occupied: &[OccupiedInterval],
    min_duration_minutes: u32,
) -> Vec<FreeSlot> {
    let Some((window_start, window_end)) = day.working_window() else {
        return Vec::new();
    };

    if occupied
        .iter()
        .any(|interval| interval.span == BusySpan::AllDay)
    {
        return Vec::new();
    }

    let mut timed: Vec<(TimeOfDay, TimeOfDay)> = occupied
        .iter()
        .filter_map(|interval| match interval.span {
            BusySpan::Timed { start, end } => Some((start, end)),
            BusySpan::AllDay => None,
        })
        .collect();
    // sort_by_key is stable; ties on start fall back to end ascending
    timed.sort_by_key(|&(start, end)| (start, end));

    let mut slots = Vec::new();
    let mut cursor = window_start;
    for (start, end) in timed {
        let gap_end = start.min(window_end);
        push_candidate(&mut slots, cursor, gap_end, min_duration_minutes);
        cursor = cursor.max(end).min(window_end);
        if cursor == window_end {
            return slots;
        }
    }

    push_candidate(&mut slots, cursor, window_end, min_duration_minutes);
    slots
}

fn push_candidate(
    slots: &mut Vec<FreeSlot>,
    start: TimeOfDay,
    end: TimeOfDay,
    min_duration_minutes: u32,
) {
    let duration = start.minutes_until(end);
    if duration > 0 && duration >= min_duration_minutes {
        slots.push(FreeSlot {
            start,
            end,
            duration_minutes: duration,
        });
    }
}

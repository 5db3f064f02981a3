//! Service layer for agenda business logic.
//!
//! These functions sit between the HTTP handlers and the repository trait.
//! They validate writes, resolve a calendar date to the guide's working
//! window, collect occupied intervals from both agenda sources, and call the
//! pure slot calculator. All functions work with any `AgendaRepository`
//! implementation.

use chrono::{Datelike, NaiveDate};
use futures::future::join_all;
use tracing::debug;

use crate::api::{
    EventRecord, GuideAvailability, GuideId, GuideInfo, NewAssignment, NewEvent, TourAssignment,
    WeeklyHours,
};
use crate::db::repository::{AgendaRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::agenda::collect_intervals;
use crate::services::availability::{compute_free_slots, DEFAULT_MIN_SLOT_MINUTES};

/// Check repository health.
pub async fn health_check(repo: &dyn AgendaRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Create a guide, rejecting blank names.
pub async fn create_guide(repo: &dyn AgendaRepository, name: &str) -> RepositoryResult<GuideInfo> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Guide name must not be blank",
            ErrorContext::new("create_guide").with_entity("guide"),
        ));
    }
    repo.create_guide(name).await
}

/// Retrieve a guide by ID.
pub async fn get_guide(
    repo: &dyn AgendaRepository,
    guide_id: GuideId,
) -> RepositoryResult<GuideInfo> {
    repo.get_guide(guide_id).await
}

/// List all guides.
pub async fn list_guides(repo: &dyn AgendaRepository) -> RepositoryResult<Vec<GuideInfo>> {
    repo.list_guides().await
}

/// Get the stored weekly working hours for a guide.
pub async fn get_working_hours(
    repo: &dyn AgendaRepository,
    guide_id: GuideId,
) -> RepositoryResult<WeeklyHours> {
    repo.get_working_hours(guide_id).await
}

/// Replace a guide's weekly working hours after validating the
/// `start < end` invariant for every enabled day.
pub async fn set_working_hours(
    repo: &dyn AgendaRepository,
    guide_id: GuideId,
    hours: &WeeklyHours,
) -> RepositoryResult<()> {
    hours.validate().map_err(|msg| {
        RepositoryError::validation_with_context(
            msg,
            ErrorContext::new("set_working_hours")
                .with_entity("guide")
                .with_entity_id(guide_id),
        )
    })?;
    repo.set_working_hours(guide_id, hours).await
}

/// Store a personal event.
///
/// New writes are held to a stricter standard than legacy reads: a timed
/// event needs both timestamps in order, an all-day event needs none.
pub async fn add_event(
    repo: &dyn AgendaRepository,
    event: &NewEvent,
) -> RepositoryResult<EventRecord> {
    if !event.all_day {
        match (event.start, event.end) {
            (Some(start), Some(end)) if start < end => {}
            (Some(_), Some(_)) => {
                return Err(RepositoryError::validation_with_context(
                    "Event start must be before end",
                    ErrorContext::new("add_event").with_entity("event"),
                ));
            }
            _ => {
                return Err(RepositoryError::validation_with_context(
                    "Event must be all-day or carry both start and end times",
                    ErrorContext::new("add_event").with_entity("event"),
                ));
            }
        }
    }
    repo.add_event(event).await
}

/// All personal events for a guide on a date.
pub async fn events_for_date(
    repo: &dyn AgendaRepository,
    guide_id: GuideId,
    date: NaiveDate,
) -> RepositoryResult<Vec<EventRecord>> {
    repo.events_for_date(guide_id, date).await
}

/// Store a tour assignment, rejecting inverted time ranges.
pub async fn add_assignment(
    repo: &dyn AgendaRepository,
    assignment: &NewAssignment,
) -> RepositoryResult<TourAssignment> {
    if assignment.start >= assignment.end {
        return Err(RepositoryError::validation_with_context(
            "Assignment start must be before end",
            ErrorContext::new("add_assignment").with_entity("assignment"),
        ));
    }
    repo.add_assignment(assignment).await
}

/// All tour assignments for a guide on a date.
pub async fn assignments_for_date(
    repo: &dyn AgendaRepository,
    guide_id: GuideId,
    date: NaiveDate,
) -> RepositoryResult<Vec<TourAssignment>> {
    repo.assignments_for_date(guide_id, date).await
}

/// Compute the bookable slots for one guide on one date.
///
/// Resolves the date's weekday against the guide's recurring hours, gathers
/// occupied intervals from personal events and tour assignments (lenient
/// conversion: malformed rows are logged and skipped), and runs the slot
/// calculator. An unknown guide is an error; a guide with no free time is an
/// empty slot list.
pub async fn guide_availability(
    repo: &dyn AgendaRepository,
    guide_id: GuideId,
    date: NaiveDate,
    min_duration_minutes: Option<u32>,
) -> RepositoryResult<GuideAvailability> {
    let guide = repo.get_guide(guide_id).await?;
    let hours = repo.get_working_hours(guide_id).await?;
    let day = hours.for_weekday(date.weekday());

    let events = repo.events_for_date(guide_id, date).await?;
    let assignments = repo.assignments_for_date(guide_id, date).await?;
    let occupied = collect_intervals(&events, &assignments);

    let min_duration = min_duration_minutes.unwrap_or(DEFAULT_MIN_SLOT_MINUTES);
    let slots = compute_free_slots(day, &occupied, min_duration);
    debug!(
        guide_id = %guide_id,
        %date,
        occupied = occupied.len(),
        slots = slots.len(),
        "computed availability"
    );

    Ok(GuideAvailability {
        guide_id,
        guide_name: guide.name,
        date,
        slots,
    })
}

/// Compute availability for several guides on one date.
///
/// When `guide_ids` is `None`, every guide is queried. The per-guide
/// computations fan out concurrently; there is no ordering or consistency
/// guarantee across guides beyond per-guide correctness, and the result
/// order follows the input guide order.
pub async fn search_availability(
    repo: &dyn AgendaRepository,
    date: NaiveDate,
    guide_ids: Option<Vec<GuideId>>,
    min_duration_minutes: Option<u32>,
) -> RepositoryResult<Vec<GuideAvailability>> {
    let ids = match guide_ids {
        Some(ids) => ids,
        None => repo.list_guides().await?.into_iter().map(|g| g.id).collect(),
    };

    let results = join_all(
        ids.into_iter()
            .map(|id| guide_availability(repo, id, date, min_duration_minutes)),
    )
    .await;

    results.into_iter().collect()
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    AvailabilityQuery, AvailabilitySearchRequest, AvailabilitySearchResponse,
    CreateAssignmentRequest, CreateEventRequest, CreateGuideRequest, DateQuery, GuideListResponse,
    HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    EventRecord, GuideAvailability, GuideId, GuideInfo, NewAssignment, NewEvent, TourAssignment,
    WeeklyHours,
};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Guide CRUD
// =============================================================================

/// GET /v1/guides
///
/// List all guides.
pub async fn list_guides(State(state): State<AppState>) -> HandlerResult<GuideListResponse> {
    let guides = db_services::list_guides(state.repository.as_ref()).await?;
    let total = guides.len();

    Ok(Json(GuideListResponse { guides, total }))
}

/// POST /v1/guides
///
/// Create a new guide.
pub async fn create_guide(
    State(state): State<AppState>,
    Json(request): Json<CreateGuideRequest>,
) -> Result<(StatusCode, Json<GuideInfo>), AppError> {
    let guide = db_services::create_guide(state.repository.as_ref(), &request.name).await?;
    Ok((StatusCode::CREATED, Json(guide)))
}

// =============================================================================
// Working Hours
// =============================================================================

/// GET /v1/guides/{guide_id}/working-hours
///
/// Get a guide's recurring weekly working hours.
pub async fn get_working_hours(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
) -> HandlerResult<WeeklyHours> {
    let hours =
        db_services::get_working_hours(state.repository.as_ref(), GuideId::new(guide_id)).await?;
    Ok(Json(hours))
}

/// PUT /v1/guides/{guide_id}/working-hours
///
/// Replace a guide's recurring weekly working hours.
pub async fn set_working_hours(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
    Json(hours): Json<WeeklyHours>,
) -> HandlerResult<WeeklyHours> {
    db_services::set_working_hours(state.repository.as_ref(), GuideId::new(guide_id), &hours)
        .await?;
    Ok(Json(hours))
}

// =============================================================================
// Personal Events
// =============================================================================

/// POST /v1/guides/{guide_id}/events
///
/// Add a personal event to a guide's agenda.
pub async fn create_event(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventRecord>), AppError> {
    let event = NewEvent {
        guide_id: GuideId::new(guide_id),
        date: request.date,
        title: request.title,
        all_day: request.all_day,
        start: request.start,
        end: request.end,
    };
    let record = db_services::add_event(state.repository.as_ref(), &event).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /v1/guides/{guide_id}/events?date=YYYY-MM-DD
///
/// List a guide's personal events on a date.
pub async fn list_events(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> HandlerResult<Vec<EventRecord>> {
    let events =
        db_services::events_for_date(state.repository.as_ref(), GuideId::new(guide_id), query.date)
            .await?;
    Ok(Json(events))
}

// =============================================================================
// Tour Assignments
// =============================================================================

/// POST /v1/guides/{guide_id}/assignments
///
/// Assign a tour to a guide.
pub async fn create_assignment(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<TourAssignment>), AppError> {
    let assignment = NewAssignment {
        guide_id: GuideId::new(guide_id),
        date: request.date,
        tour_name: request.tour_name,
        start: request.start,
        end: request.end,
    };
    let record = db_services::add_assignment(state.repository.as_ref(), &assignment).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /v1/guides/{guide_id}/assignments?date=YYYY-MM-DD
///
/// List a guide's tour assignments on a date.
pub async fn list_assignments(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> HandlerResult<Vec<TourAssignment>> {
    let assignments = db_services::assignments_for_date(
        state.repository.as_ref(),
        GuideId::new(guide_id),
        query.date,
    )
    .await?;
    Ok(Json(assignments))
}

// =============================================================================
// Availability
// =============================================================================

/// GET /v1/guides/{guide_id}/availability?date=YYYY-MM-DD&min_duration=N
///
/// Compute the bookable free slots for one guide on one date.
pub async fn get_availability(
    State(state): State<AppState>,
    Path(guide_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<GuideAvailability> {
    let availability = db_services::guide_availability(
        state.repository.as_ref(),
        GuideId::new(guide_id),
        query.date,
        query.min_duration,
    )
    .await?;
    Ok(Json(availability))
}

/// POST /v1/availability/search
///
/// Compute availability for several guides (all guides when `guide_ids` is
/// omitted) on one date.
pub async fn search_availability(
    State(state): State<AppState>,
    Json(request): Json<AvailabilitySearchRequest>,
) -> HandlerResult<AvailabilitySearchResponse> {
    let guide_ids = request
        .guide_ids
        .map(|ids| ids.into_iter().map(GuideId::new).collect());

    let guides = db_services::search_availability(
        state.repository.as_ref(),
        request.date,
        guide_ids,
        request.min_duration,
    )
    .await?;
    let total = guides.len();

    Ok(Json(AvailabilitySearchResponse {
        date: request.date,
        guides,
        total,
    }))
}

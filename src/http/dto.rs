//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Domain types that already derive Serialize/Deserialize are re-exported
//! and used directly in responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export domain types that serve directly as response bodies
pub use crate::api::{
    EventRecord, FreeSlot, GuideAvailability, GuideInfo, TimeOfDay, TourAssignment, WeeklyHours,
};

/// Request body for creating a new guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuideRequest {
    /// Display name for the guide
    pub name: String,
}

/// Guide list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideListResponse {
    /// List of guides
    pub guides: Vec<GuideInfo>,
    /// Total count
    pub total: usize,
}

/// Request body for creating a personal event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Event title
    pub title: String,
    /// Whether the event blocks the whole day (default: false)
    #[serde(default)]
    pub all_day: bool,
    /// Start time (required unless all-day)
    #[serde(default)]
    pub start: Option<TimeOfDay>,
    /// End time (required unless all-day)
    #[serde(default)]
    pub end: Option<TimeOfDay>,
}

/// Request body for creating a tour assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    /// Calendar date of the tour
    pub date: NaiveDate,
    /// Tour name
    pub tour_name: String,
    /// Tour start time
    pub start: TimeOfDay,
    /// Tour end time
    pub end: TimeOfDay,
}

/// Query parameters for listing agenda records on a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Query parameters for the single-guide availability endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Minimum bookable slot length in minutes (default: 60)
    #[serde(default)]
    pub min_duration: Option<u32>,
}

/// Request body for the multi-guide availability search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySearchRequest {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Guides to query; all guides when omitted
    #[serde(default)]
    pub guide_ids: Option<Vec<i64>>,
    /// Minimum bookable slot length in minutes (default: 60)
    #[serde(default)]
    pub min_duration: Option<u32>,
}

/// Response for the multi-guide availability search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySearchResponse {
    /// Queried date
    pub date: NaiveDate,
    /// Per-guide availability in guide order
    pub guides: Vec<GuideAvailability>,
    /// Number of guides queried
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}

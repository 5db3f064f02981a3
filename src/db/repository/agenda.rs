//! Core agenda repository trait.
//!
//! This trait defines the storage operations for guides, their recurring
//! working hours, personal events, and tour assignments. It is the injected
//! store consumed by the service layer; the slot calculator itself never
//! touches storage.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{
    EventRecord, GuideId, GuideInfo, NewAssignment, NewEvent, TourAssignment, WeeklyHours,
};

/// Repository trait for agenda storage operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AgendaRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if the backend is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Guide Operations ====================

    /// Store a new guide and assign it an ID.
    async fn create_guide(&self, name: &str) -> RepositoryResult<GuideInfo>;

    /// Retrieve a guide by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the guide doesn't exist
    async fn get_guide(&self, guide_id: GuideId) -> RepositoryResult<GuideInfo>;

    /// List all guides.
    async fn list_guides(&self) -> RepositoryResult<Vec<GuideInfo>>;

    // ==================== Working Hours ====================

    /// Get the recurring weekly working hours for a guide.
    ///
    /// Guides without stored hours get the default (every day disabled).
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the guide doesn't exist
    async fn get_working_hours(&self, guide_id: GuideId) -> RepositoryResult<WeeklyHours>;

    /// Replace the weekly working hours for a guide.
    ///
    /// Implementations store the hours as given; invariant validation
    /// (`start < end` per enabled day) is the service layer's concern.
    async fn set_working_hours(
        &self,
        guide_id: GuideId,
        hours: &WeeklyHours,
    ) -> RepositoryResult<()>;

    // ==================== Personal Events ====================

    /// Store a personal event and assign it an ID.
    async fn add_event(&self, event: &NewEvent) -> RepositoryResult<EventRecord>;

    /// All personal events for a guide on a calendar date.
    async fn events_for_date(
        &self,
        guide_id: GuideId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<EventRecord>>;

    // ==================== Tour Assignments ====================

    /// Store a tour assignment and assign it an ID.
    async fn add_assignment(&self, assignment: &NewAssignment)
        -> RepositoryResult<TourAssignment>;

    /// All tour assignments for a guide on a calendar date.
    async fn assignments_for_date(
        &self,
        guide_id: GuideId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<TourAssignment>>;
}

//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the agenda repository
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{
    AssignmentId, EventId, EventRecord, GuideId, GuideInfo, NewAssignment, NewEvent,
    TourAssignment, WeeklyHours,
};
use crate::db::repository::{AgendaRepository, ErrorContext, RepositoryError, RepositoryResult};

/// In-memory agenda repository.
///
/// Cloning is cheap; clones share the same underlying data.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    guides: HashMap<GuideId, GuideInfo>,
    working_hours: HashMap<GuideId, WeeklyHours>,
    events: HashMap<EventId, EventRecord>,
    assignments: HashMap<AssignmentId, TourAssignment>,

    // ID counters
    next_guide_id: i64,
    next_event_id: i64,
    next_assignment_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            guides: HashMap::new(),
            working_hours: HashMap::new(),
            events: HashMap::new(),
            assignments: HashMap::new(),
            next_guide_id: 1,
            next_event_id: 1,
            next_assignment_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository, preserving the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of guides stored.
    pub fn guide_count(&self) -> usize {
        self.data.read().guides.len()
    }

    /// Insert an event record verbatim, bypassing service-layer validation.
    ///
    /// Test hook for seeding the malformed rows that lenient conversion must
    /// tolerate; the returned ID is assigned by the repository.
    pub fn seed_event_unchecked(&self, mut event: EventRecord) -> EventId {
        let mut data = self.data.write();
        let id = EventId::new(data.next_event_id);
        data.next_event_id += 1;
        event.id = id;
        data.events.insert(id, event);
        id
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Storage backend is not healthy"));
        }
        Ok(())
    }

    fn require_guide(data: &LocalData, guide_id: GuideId) -> RepositoryResult<()> {
        if data.guides.contains_key(&guide_id) {
            Ok(())
        } else {
            Err(RepositoryError::not_found_with_context(
                format!("Guide {} not found", guide_id),
                ErrorContext::default()
                    .with_entity("guide")
                    .with_entity_id(guide_id),
            ))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgendaRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn create_guide(&self, name: &str) -> RepositoryResult<GuideInfo> {
        self.check_health()?;
        let mut data = self.data.write();
        let id = GuideId::new(data.next_guide_id);
        data.next_guide_id += 1;

        let guide = GuideInfo {
            id,
            name: name.to_string(),
        };
        data.guides.insert(id, guide.clone());
        Ok(guide)
    }

    async fn get_guide(&self, guide_id: GuideId) -> RepositoryResult<GuideInfo> {
        self.check_health()?;
        let data = self.data.read();
        data.guides.get(&guide_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Guide {} not found", guide_id),
                ErrorContext::new("get_guide")
                    .with_entity("guide")
                    .with_entity_id(guide_id),
            )
        })
    }

    async fn list_guides(&self) -> RepositoryResult<Vec<GuideInfo>> {
        self.check_health()?;
        let data = self.data.read();
        let mut guides: Vec<GuideInfo> = data.guides.values().cloned().collect();
        guides.sort_by_key(|g| g.id);
        Ok(guides)
    }

    async fn get_working_hours(&self, guide_id: GuideId) -> RepositoryResult<WeeklyHours> {
        self.check_health()?;
        let data = self.data.read();
        Self::require_guide(&data, guide_id)?;
        Ok(data
            .working_hours
            .get(&guide_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_working_hours(
        &self,
        guide_id: GuideId,
        hours: &WeeklyHours,
    ) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        Self::require_guide(&data, guide_id)?;
        data.working_hours.insert(guide_id, hours.clone());
        Ok(())
    }

    async fn add_event(&self, event: &NewEvent) -> RepositoryResult<EventRecord> {
        self.check_health()?;
        let mut data = self.data.write();
        Self::require_guide(&data, event.guide_id)?;

        let id = EventId::new(data.next_event_id);
        data.next_event_id += 1;

        let record = EventRecord {
            id,
            guide_id: event.guide_id,
            date: event.date,
            title: event.title.clone(),
            all_day: event.all_day,
            start: event.start,
            end: event.end,
        };
        data.events.insert(id, record.clone());
        Ok(record)
    }

    async fn events_for_date(
        &self,
        guide_id: GuideId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<EventRecord>> {
        self.check_health()?;
        let data = self.data.read();
        Self::require_guide(&data, guide_id)?;
        let mut events: Vec<EventRecord> = data
            .events
            .values()
            .filter(|e| e.guide_id == guide_id && e.date == date)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.id.value());
        Ok(events)
    }

    async fn add_assignment(
        &self,
        assignment: &NewAssignment,
    ) -> RepositoryResult<TourAssignment> {
        self.check_health()?;
        let mut data = self.data.write();
        Self::require_guide(&data, assignment.guide_id)?;

        let id = AssignmentId::new(data.next_assignment_id);
        data.next_assignment_id += 1;

        let record = TourAssignment {
            id,
            guide_id: assignment.guide_id,
            date: assignment.date,
            tour_name: assignment.tour_name.clone(),
            start: assignment.start,
            end: assignment.end,
        };
        data.assignments.insert(id, record.clone());
        Ok(record)
    }

    async fn assignments_for_date(
        &self,
        guide_id: GuideId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<TourAssignment>> {
        self.check_health()?;
        let data = self.data.read();
        Self::require_guide(&data, guide_id)?;
        let mut assignments: Vec<TourAssignment> = data
            .assignments
            .values()
            .filter(|a| a.guide_id == guide_id && a.date == date)
            .cloned()
            .collect();
        assignments.sort_by_key(|a| a.id.value());
        Ok(assignments)
    }
}

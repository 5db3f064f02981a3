//! Public API surface for the Rust backend.
//!
//! This file consolidates the typed domain entities shared by the repository,
//! service, and HTTP layers. All types derive Serialize/Deserialize for JSON
//! serialization.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub use crate::models::TimeOfDay;

/// Guide identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuideId(pub i64);

/// Personal event identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub i64);

/// Tour assignment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub i64);

impl GuideId {
    pub fn new(value: i64) -> Self {
        GuideId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AssignmentId {
    pub fn new(value: i64) -> Self {
        AssignmentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GuideId> for i64 {
    fn from(id: GuideId) -> Self {
        id.0
    }
}

/// Working window for a single day of the week.
///
/// Invariant: if `enabled`, then `start < end`. The invariant is enforced
/// when working hours are stored; consumers read the window through
/// [`DaySchedule::working_window`], which degrades an invalid window to
/// `None` rather than producing negative-length slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Whether the guide works on this day
    pub enabled: bool,
    /// Start of the working window
    pub start: TimeOfDay,
    /// End of the working window (exclusive)
    pub end: TimeOfDay,
}

impl DaySchedule {
    /// A disabled day with a conventional 09:00-17:00 window.
    pub fn off() -> Self {
        Self {
            enabled: false,
            start: TimeOfDay::from_hm(9, 0),
            end: TimeOfDay::from_hm(17, 0),
        }
    }

    /// An enabled working window.
    pub fn working(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            enabled: true,
            start,
            end,
        }
    }

    /// The effective working window, or `None` when the day is disabled or
    /// the stored window is inverted.
    pub fn working_window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        if self.enabled && self.start < self.end {
            Some((self.start, self.end))
        } else {
            None
        }
    }

    fn is_valid(&self) -> bool {
        !self.enabled || self.start < self.end
    }
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self::off()
    }
}

/// Recurring weekly working hours for a guide (one entry per weekday).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    #[serde(default)]
    pub monday: DaySchedule,
    #[serde(default)]
    pub tuesday: DaySchedule,
    #[serde(default)]
    pub wednesday: DaySchedule,
    #[serde(default)]
    pub thursday: DaySchedule,
    #[serde(default)]
    pub friday: DaySchedule,
    #[serde(default)]
    pub saturday: DaySchedule,
    #[serde(default)]
    pub sunday: DaySchedule,
}

impl WeeklyHours {
    /// The schedule for a given weekday.
    pub fn for_weekday(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Validate the `start < end` invariant for every enabled day.
    ///
    /// Returns the name of the first offending weekday.
    pub fn validate(&self) -> Result<(), String> {
        let days = [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ];
        for (name, day) in days {
            if !day.is_valid() {
                return Err(format!(
                    "{}: enabled day must have start < end (got {} >= {})",
                    name, day.start, day.end
                ));
            }
        }
        Ok(())
    }
}

/// Origin of an occupied interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalSource {
    /// Personal calendar event entered by the guide
    Personal,
    /// Tour assigned to the guide by the operator
    AssignedTour,
}

/// Time span claimed by an occupied interval.
///
/// The tagged form replaces the loosely-typed `{ all_day, start?, end? }`
/// records at the storage boundary: once an interval exists, it is either a
/// whole-day block or a well-formed timed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusySpan {
    /// Consumes the entire day regardless of any timestamps
    AllDay,
    /// A timed range within the day, `start < end`
    Timed { start: TimeOfDay, end: TimeOfDay },
}

/// A committed time range on a guide's agenda for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedInterval {
    /// The span claimed by this interval
    pub span: BusySpan,
    /// Human-readable label (event title or tour name)
    pub label: String,
    /// Where this interval came from
    pub source: IntervalSource,
}

impl OccupiedInterval {
    pub fn all_day(label: impl Into<String>, source: IntervalSource) -> Self {
        Self {
            span: BusySpan::AllDay,
            label: label.into(),
            source,
        }
    }

    pub fn timed(
        start: TimeOfDay,
        end: TimeOfDay,
        label: impl Into<String>,
        source: IntervalSource,
    ) -> Self {
        Self {
            span: BusySpan::Timed { start, end },
            label: label.into(),
            source,
        }
    }
}

/// A bookable window within working hours.
///
/// Invariant: `duration_minutes = end - start > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// Start of the free window
    pub start: TimeOfDay,
    /// End of the free window (exclusive)
    pub end: TimeOfDay,
    /// Length of the window in minutes
    pub duration_minutes: u32,
}

/// Guide master data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideInfo {
    /// Guide ID
    pub id: GuideId,
    /// Display name
    pub name: String,
}

/// A personal calendar event as stored.
///
/// This is the loosely-typed storage shape: legacy agenda data may carry an
/// `all_day` flag, a timed pair, or (for malformed rows) neither. Conversion
/// to [`OccupiedInterval`] happens in [`crate::models::agenda`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event ID
    pub id: EventId,
    /// Owning guide
    pub guide_id: GuideId,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Event title
    pub title: String,
    /// Whether the event blocks the whole day
    #[serde(default)]
    pub all_day: bool,
    /// Start time (ignored when `all_day`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<TimeOfDay>,
    /// End time (ignored when `all_day`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeOfDay>,
}

/// Payload for creating a personal event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub guide_id: GuideId,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeOfDay>,
}

/// A tour assigned to a guide on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourAssignment {
    /// Assignment ID
    pub id: AssignmentId,
    /// Assigned guide
    pub guide_id: GuideId,
    /// Calendar date of the tour
    pub date: NaiveDate,
    /// Tour name
    pub tour_name: String,
    /// Tour start time
    pub start: TimeOfDay,
    /// Tour end time (exclusive)
    pub end: TimeOfDay,
}

/// Payload for creating a tour assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub guide_id: GuideId,
    pub date: NaiveDate,
    pub tour_name: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Availability of one guide on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideAvailability {
    /// Guide ID
    pub guide_id: GuideId,
    /// Guide display name
    pub guide_name: String,
    /// Queried date
    pub date: NaiveDate,
    /// Bookable slots in chronological order
    pub slots: Vec<FreeSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_id_roundtrip() {
        let id = GuideId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_day_schedule_default_is_disabled() {
        let day = DaySchedule::default();
        assert!(!day.enabled);
        assert!(day.working_window().is_none());
    }

    #[test]
    fn test_working_window_inverted_is_none() {
        let day = DaySchedule::working(TimeOfDay::from_hm(17, 0), TimeOfDay::from_hm(9, 0));
        assert!(day.working_window().is_none());
    }

    #[test]
    fn test_weekly_hours_validate_rejects_inverted_day() {
        let mut hours = WeeklyHours::default();
        hours.wednesday =
            DaySchedule::working(TimeOfDay::from_hm(18, 0), TimeOfDay::from_hm(8, 0));
        let err = hours.validate().unwrap_err();
        assert!(err.contains("wednesday"), "unexpected message: {}", err);
    }

    #[test]
    fn test_weekly_hours_for_weekday() {
        let mut hours = WeeklyHours::default();
        hours.saturday =
            DaySchedule::working(TimeOfDay::from_hm(10, 0), TimeOfDay::from_hm(14, 0));
        assert!(hours.for_weekday(Weekday::Sat).enabled);
        assert!(!hours.for_weekday(Weekday::Sun).enabled);
    }

    #[test]
    fn test_busy_span_serde_shape() {
        let timed = BusySpan::Timed {
            start: TimeOfDay::from_hm(9, 30),
            end: TimeOfDay::from_hm(11, 0),
        };
        let json = serde_json::to_value(&timed).unwrap();
        assert_eq!(json["timed"]["start"], "09:30");
        assert_eq!(json["timed"]["end"], "11:00");

        let all_day = serde_json::to_value(BusySpan::AllDay).unwrap();
        assert_eq!(all_day, serde_json::json!("all_day"));
    }
}

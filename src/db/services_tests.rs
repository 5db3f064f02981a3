use chrono::NaiveDate;

use crate::api::{
    DaySchedule, EventId, EventRecord, GuideId, NewAssignment, NewEvent, TimeOfDay, WeeklyHours,
};
use crate::db::repositories::LocalRepository;
use crate::db::repository::RepositoryError;
use crate::db::services;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

/// 2026-03-13 is a Friday.
fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 13).unwrap()
}

fn weekday_hours(start: &str, end: &str) -> WeeklyHours {
    let window = DaySchedule::working(t(start), t(end));
    WeeklyHours {
        monday: window,
        tuesday: window,
        wednesday: window,
        thursday: window,
        friday: window,
        ..Default::default()
    }
}

async fn guide_with_hours(repo: &LocalRepository, name: &str, hours: WeeklyHours) -> GuideId {
    let guide = services::create_guide(repo, name).await.unwrap();
    services::set_working_hours(repo, guide.id, &hours)
        .await
        .unwrap();
    guide.id
}

#[tokio::test]
async fn test_create_guide_rejects_blank_name() {
    let repo = LocalRepository::new();
    let err = services::create_guide(&repo, "   ").await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_set_working_hours_rejects_inverted_window() {
    let repo = LocalRepository::new();
    let guide = services::create_guide(&repo, "Ana").await.unwrap();

    let mut hours = WeeklyHours::default();
    hours.monday = DaySchedule::working(t("17:00"), t("09:00"));
    let err = services::set_working_hours(&repo, guide.id, &hours)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_add_event_requires_times_or_all_day() {
    let repo = LocalRepository::new();
    let guide = services::create_guide(&repo, "Ana").await.unwrap();

    let event = NewEvent {
        guide_id: guide.id,
        date: friday(),
        title: "untimed".to_string(),
        all_day: false,
        start: None,
        end: None,
    };
    let err = services::add_event(&repo, &event).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_availability_worked_example() {
    let repo = LocalRepository::new();
    let guide_id = guide_with_hours(&repo, "Ana", weekday_hours("09:00", "17:00")).await;

    services::add_event(
        &repo,
        &NewEvent {
            guide_id,
            date: friday(),
            title: "lunch meeting".to_string(),
            all_day: false,
            start: Some(t("12:00")),
            end: Some(t("13:00")),
        },
    )
    .await
    .unwrap();

    let availability = services::guide_availability(&repo, guide_id, friday(), Some(30))
        .await
        .unwrap();

    assert_eq!(availability.guide_name, "Ana");
    assert_eq!(availability.slots.len(), 2);
    assert_eq!(availability.slots[0].start, t("09:00"));
    assert_eq!(availability.slots[0].end, t("12:00"));
    assert_eq!(availability.slots[0].duration_minutes, 180);
    assert_eq!(availability.slots[1].start, t("13:00"));
    assert_eq!(availability.slots[1].end, t("17:00"));
    assert_eq!(availability.slots[1].duration_minutes, 240);
}

#[tokio::test]
async fn test_availability_merges_events_and_assignments() {
    let repo = LocalRepository::new();
    let guide_id = guide_with_hours(&repo, "Ana", weekday_hours("08:00", "18:00")).await;

    services::add_event(
        &repo,
        &NewEvent {
            guide_id,
            date: friday(),
            title: "errand".to_string(),
            all_day: false,
            start: Some(t("09:00")),
            end: Some(t("11:00")),
        },
    )
    .await
    .unwrap();
    services::add_assignment(
        &repo,
        &NewAssignment {
            guide_id,
            date: friday(),
            tour_name: "Harbor Cruise".to_string(),
            start: t("10:00"),
            end: t("12:00"),
        },
    )
    .await
    .unwrap();

    let availability = services::guide_availability(&repo, guide_id, friday(), Some(60))
        .await
        .unwrap();

    // Overlapping personal and tour intervals merge into one occupied span
    assert_eq!(availability.slots.len(), 2);
    assert_eq!(availability.slots[0].start, t("08:00"));
    assert_eq!(availability.slots[0].end, t("09:00"));
    assert_eq!(availability.slots[1].start, t("12:00"));
    assert_eq!(availability.slots[1].end, t("18:00"));
}

#[tokio::test]
async fn test_availability_non_working_day_is_empty() {
    let repo = LocalRepository::new();
    let guide_id = guide_with_hours(&repo, "Ana", weekday_hours("09:00", "17:00")).await;

    // 2026-03-15 is a Sunday, disabled in weekday_hours
    let sunday = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let availability = services::guide_availability(&repo, guide_id, sunday, None)
        .await
        .unwrap();
    assert!(availability.slots.is_empty());
}

#[tokio::test]
async fn test_availability_skips_malformed_seeded_event() {
    let repo = LocalRepository::new();
    let guide_id = guide_with_hours(&repo, "Ana", weekday_hours("09:00", "17:00")).await;

    // Legacy-style row: not all-day, no timestamps; must be ignored
    repo.seed_event_unchecked(EventRecord {
        id: EventId::new(0),
        guide_id,
        date: friday(),
        title: "corrupt".to_string(),
        all_day: false,
        start: None,
        end: None,
    });

    let availability = services::guide_availability(&repo, guide_id, friday(), None)
        .await
        .unwrap();
    assert_eq!(availability.slots.len(), 1);
    assert_eq!(availability.slots[0].duration_minutes, 480);
}

#[tokio::test]
async fn test_availability_unknown_guide() {
    let repo = LocalRepository::new();
    let err = services::guide_availability(&repo, GuideId::new(404), friday(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_search_availability_all_guides() {
    let repo = LocalRepository::new();
    let ana = guide_with_hours(&repo, "Ana", weekday_hours("09:00", "17:00")).await;
    let bruno = guide_with_hours(&repo, "Bruno", weekday_hours("10:00", "14:00")).await;

    services::add_event(
        &repo,
        &NewEvent {
            guide_id: bruno,
            date: friday(),
            title: "blocked".to_string(),
            all_day: true,
            start: None,
            end: None,
        },
    )
    .await
    .unwrap();

    let results = services::search_availability(&repo, friday(), None, None)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].guide_id, ana);
    assert_eq!(results[0].slots.len(), 1);
    assert_eq!(results[1].guide_id, bruno);
    assert!(results[1].slots.is_empty());
}

#[tokio::test]
async fn test_search_availability_selected_guides() {
    let repo = LocalRepository::new();
    let _ana = guide_with_hours(&repo, "Ana", weekday_hours("09:00", "17:00")).await;
    let bruno = guide_with_hours(&repo, "Bruno", weekday_hours("10:00", "14:00")).await;

    let results = services::search_availability(&repo, friday(), Some(vec![bruno]), None)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].guide_id, bruno);
}

#[tokio::test]
async fn test_search_availability_propagates_unknown_guide() {
    let repo = LocalRepository::new();
    let err = services::search_availability(&repo, friday(), Some(vec![GuideId::new(7)]), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

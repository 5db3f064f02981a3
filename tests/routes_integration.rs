use chrono::NaiveDate;

use gira_rust::api::{DaySchedule, FreeSlot, GuideId, TimeOfDay, WeeklyHours};
use gira_rust::db::repositories::LocalRepository;
use gira_rust::db::services;
use gira_rust::http::{create_router, AppState};
use std::sync::Arc;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_service_layer_lists_created_guides() {
    let repo = LocalRepository::new();
    let _ = services::create_guide(&repo, "Ana").await.unwrap();

    let guides = services::list_guides(&repo).await.unwrap();
    assert!(!guides.is_empty());
}

#[tokio::test]
async fn test_search_covers_every_guide() {
    let repo = LocalRepository::new();
    for name in ["Ana", "Bruno", "Carla"] {
        let guide = services::create_guide(&repo, name).await.unwrap();
        let mut hours = WeeklyHours::default();
        hours.friday = DaySchedule::working(t("09:00"), t("17:00"));
        services::set_working_hours(&repo, guide.id, &hours)
            .await
            .unwrap();
    }

    let friday = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();
    let results = services::search_availability(&repo, friday, None, None)
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
    for availability in &results {
        assert_eq!(availability.date, friday);
        assert_eq!(availability.slots.len(), 1);
    }
}

#[test]
fn test_router_builds_with_local_repository() {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn gira_rust::db::AgendaRepository>;
    let _router = create_router(AppState::new(repo));
}

#[test]
fn test_guide_id_dto_roundtrip() {
    let id = GuideId::new(1);
    assert_eq!(id.value(), 1);
    assert_eq!(serde_json::to_string(&id).unwrap(), "1");
}

#[test]
fn test_free_slot_serialization_shape() {
    let slot = FreeSlot {
        start: t("09:00"),
        end: t("12:00"),
        duration_minutes: 180,
    };
    let json = serde_json::to_value(&slot).unwrap();
    assert_eq!(json["start"], "09:00");
    assert_eq!(json["end"], "12:00");
    assert_eq!(json["duration_minutes"], 180);
}

#[test]
fn test_weekly_hours_accepts_partial_json() {
    // Days omitted from the payload default to disabled
    let hours: WeeklyHours = serde_json::from_str(
        r#"{ "monday": { "enabled": true, "start": "08:00", "end": "12:00" } }"#,
    )
    .unwrap();
    assert!(hours.monday.enabled);
    assert!(!hours.sunday.enabled);
}

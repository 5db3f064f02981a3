//! Property-style tests for the free-slot computation, exercised through the
//! public service API over the in-memory repository.

use chrono::NaiveDate;

use gira_rust::api::{
    DaySchedule, IntervalSource, OccupiedInterval, TimeOfDay, WeeklyHours,
};
use gira_rust::db::repositories::LocalRepository;
use gira_rust::db::services;
use gira_rust::services::availability::{compute_free_slots, DEFAULT_MIN_SLOT_MINUTES};

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn busy(start: &str, end: &str) -> OccupiedInterval {
    OccupiedInterval::timed(t(start), t(end), "busy", IntervalSource::Personal)
}

#[test]
fn disabled_day_is_empty_regardless_of_intervals() {
    let day = DaySchedule::off();
    let cases: Vec<Vec<OccupiedInterval>> = vec![
        vec![],
        vec![busy("09:00", "10:00")],
        vec![OccupiedInterval::all_day("holiday", IntervalSource::Personal)],
    ];
    for occupied in cases {
        assert!(compute_free_slots(&day, &occupied, 60).is_empty());
    }
}

#[test]
fn any_all_day_interval_empties_the_day() {
    let day = DaySchedule::working(t("08:00"), t("18:00"));
    let occupied = vec![
        busy("09:00", "10:00"),
        OccupiedInterval::all_day("sick leave", IntervalSource::Personal),
        busy("14:00", "15:00"),
    ];
    assert!(compute_free_slots(&day, &occupied, 1).is_empty());
}

#[test]
fn disjoint_intervals_produce_exact_gaps() {
    // [9:00,10:00) and [14:00,15:00) within 08:00-18:00, min 60
    let day = DaySchedule::working(t("08:00"), t("18:00"));
    let occupied = vec![busy("09:00", "10:00"), busy("14:00", "15:00")];
    let slots = compute_free_slots(&day, &occupied, 60);

    let rendered: Vec<(String, String)> = slots
        .iter()
        .map(|s| (s.start.to_string(), s.end.to_string()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("08:00".to_string(), "09:00".to_string()),
            ("10:00".to_string(), "14:00".to_string()),
            ("15:00".to_string(), "18:00".to_string()),
        ]
    );
}

#[test]
fn overlapping_intervals_merge_into_one_occupied_span() {
    let day = DaySchedule::working(t("08:00"), t("18:00"));
    let occupied = vec![busy("09:00", "11:00"), busy("10:00", "12:00")];
    let slots = compute_free_slots(&day, &occupied, 60);

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].start, t("08:00"));
    assert_eq!(slots[0].end, t("09:00"));
    assert_eq!(slots[1].start, t("12:00"));
    assert_eq!(slots[1].end, t("18:00"));
}

#[test]
fn slot_of_exactly_minimum_duration_is_kept() {
    let day = DaySchedule::working(t("09:00"), t("17:00"));
    let occupied = vec![busy("10:00", "17:00")];

    let kept = compute_free_slots(&day, &occupied, 60);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].duration_minutes, 60);

    let dropped = compute_free_slots(&day, &occupied, 61);
    assert!(dropped.is_empty());
}

#[test]
fn shuffled_input_produces_identical_output() {
    let day = DaySchedule::working(t("08:00"), t("20:00"));
    let base = vec![
        busy("09:00", "09:45"),
        busy("11:00", "12:30"),
        busy("09:30", "10:15"),
        busy("15:00", "16:00"),
    ];
    let expected = compute_free_slots(&day, &base, 30);

    // Every rotation of the input yields the same slots
    for rotation in 0..base.len() {
        let mut shuffled = base.clone();
        shuffled.rotate_left(rotation);
        assert_eq!(
            compute_free_slots(&day, &shuffled, 30),
            expected,
            "rotation {} diverged",
            rotation
        );
    }
}

#[test]
fn repeated_calls_are_idempotent() {
    let day = DaySchedule::working(t("08:00"), t("18:00"));
    let occupied = vec![busy("09:00", "10:00"), busy("12:00", "13:30")];
    let first = compute_free_slots(&day, &occupied, DEFAULT_MIN_SLOT_MINUTES);
    for _ in 0..3 {
        assert_eq!(
            compute_free_slots(&day, &occupied, DEFAULT_MIN_SLOT_MINUTES),
            first
        );
    }
}

#[tokio::test]
async fn worked_example_through_the_service_layer() {
    let repo = LocalRepository::new();
    let guide = services::create_guide(&repo, "Ana").await.unwrap();

    // 2026-03-13 is a Friday
    let date = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();
    let mut hours = WeeklyHours::default();
    hours.friday = DaySchedule::working(t("09:00"), t("17:00"));
    services::set_working_hours(&repo, guide.id, &hours)
        .await
        .unwrap();

    services::add_event(
        &repo,
        &gira_rust::api::NewEvent {
            guide_id: guide.id,
            date,
            title: "lunch meeting".to_string(),
            all_day: false,
            start: Some(t("12:00")),
            end: Some(t("13:00")),
        },
    )
    .await
    .unwrap();

    let availability = services::guide_availability(&repo, guide.id, date, Some(30))
        .await
        .unwrap();

    let rendered: Vec<(String, String, u32)> = availability
        .slots
        .iter()
        .map(|s| (s.start.to_string(), s.end.to_string(), s.duration_minutes))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("09:00".to_string(), "12:00".to_string(), 180),
            ("13:00".to_string(), "17:00".to_string(), 240),
        ]
    );
}

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use study_slot_grid::api::selection_dto::SelectionDto;
use study_slot_grid::domain::clock::fixed_clock::FixedClock;
use study_slot_grid::domain::selection::selection_listener::RecordingListener;
use study_slot_grid::domain::slot_model::time_of_day::TimeOfDay;
use study_slot_grid::error::Error;
use study_slot_grid::load_time_slot_grid_with_clock;

fn hm(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::from_hm(h, m)
}

fn monday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 0, 0).unwrap()
}

fn write_scenario(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("slot_grid_{}_{}.json", std::process::id(), name));
    std::fs::write(&path, json).unwrap();
    path
}

fn load(name: &str, json: &str) -> (study_slot_grid::error::Result<study_slot_grid::domain::grid::time_slot_grid::TimeSlotGrid>, RecordingListener) {
    let path = write_scenario(name, json);
    let listener = RecordingListener::new();
    let grid = load_time_slot_grid_with_clock(path.to_str().unwrap(), Arc::new(FixedClock::new(monday_morning())), Box::new(listener.clone()));
    let _ = std::fs::remove_file(&path);
    (grid, listener)
}

const TUESDAY_SCENARIO: &str = r#"{
    "config": { "timezone": "Asia/Seoul", "slotPixelHeight": 16.0 },
    "operatingHours": {
        "weekday": { "start": "08:00", "end": "22:00" },
        "weekend": { "start": "10:00", "end": "18:00" }
    },
    "bookedSlots": [
        { "start": "12:00", "end": "13:00" },
        { "start": "not a time", "end": "14:00" }
    ],
    "selectedDate": "2026-10-20"
}"#;

#[test]
fn test_load_scenario() {
    let (grid, listener) = load("tuesday", TUESDAY_SCENARIO);
    let grid = grid.unwrap();

    assert_eq!(grid.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert_eq!(grid.config().timezone, chrono_tz::Asia::Seoul);
    assert_eq!(grid.config().slot_pixel_height, 16.0);
    assert_eq!(grid.slots().len(), 56);
    assert_eq!(grid.slots().iter().filter(|s| s.is_blocked).count(), 4);
    assert!(grid.selection().is_none());
    assert!(listener.is_empty());
}

#[test]
fn test_weekend_hours_apply_on_saturday() {
    let json = TUESDAY_SCENARIO.replace("2026-10-20", "2026-10-24");
    let (grid, _) = load("saturday", &json);
    let grid = grid.unwrap();

    assert_eq!(grid.slots().len(), 32);
    assert_eq!(grid.slots()[0].offset, hm(10, 0));
}

#[test]
fn test_missing_weekend_falls_back_to_weekday() {
    let json = r#"{
        "operatingHours": { "weekday": { "start": "09:00", "end": "17:00" } },
        "selectedDate": "2026-10-24"
    }"#;
    let (grid, _) = load("fallback", json);
    let grid = grid.unwrap();

    assert_eq!(grid.slots().len(), 32);
    assert_eq!(grid.slots()[0].offset, hm(9, 0));
}

#[test]
fn test_available_starts() {
    let json = r#"{
        "operatingHours": { "weekday": { "start": "09:00", "end": "12:00" } },
        "bookedSlots": [{ "start": "10:30", "end": "11:00" }],
        "selectedDate": "2026-10-20"
    }"#;
    let (grid, _) = load("available", json);
    let grid = grid.unwrap();

    // 09:00..=09:30 fit an hour before the booking, 11:00 fits an hour before closing.
    assert_eq!(grid.available_starts(), vec![hm(9, 0), hm(9, 15), hm(9, 30), hm(11, 0)]);
}

#[test]
fn test_load_errors() {
    let (grid, _) = load("bad_date", r#"{ "operatingHours": { "weekday": {} }, "selectedDate": "20.10.2026" }"#);
    assert!(matches!(grid, Err(Error::InvalidDate(_))));

    let (grid, _) = load("bad_zone", r#"{ "config": { "timezone": "Nowhere/Else" }, "operatingHours": { "weekday": {} }, "selectedDate": "2026-10-20" }"#);
    assert!(matches!(grid, Err(Error::UnknownTimezone(_))));

    let (grid, _) = load("bad_json", r#"{ "selectedDate": "#);
    assert!(matches!(grid, Err(Error::DeserializationError(_))));

    let missing = std::env::temp_dir().join("slot_grid_this_file_does_not_exist.json");
    let grid = load_time_slot_grid_with_clock(missing.to_str().unwrap(), Arc::new(FixedClock::new(monday_morning())), Box::new(RecordingListener::new()));
    assert!(matches!(grid, Err(Error::IoError(_))));
}

#[test]
fn test_incomplete_hours_mean_closed() {
    let (grid, _) = load("closed", r#"{ "operatingHours": { "weekday": { "start": "09:00" } }, "selectedDate": "2026-10-20" }"#);
    let mut grid = grid.unwrap();

    assert!(grid.slots().is_empty());
    assert!(!grid.click(hm(9, 0)));
}

#[test]
fn test_external_reset_clears_selection() {
    let (grid, listener) = load("external", TUESDAY_SCENARIO);
    let mut grid = grid.unwrap();

    grid.click(hm(14, 0));
    let snapshot = grid.snapshot();
    assert_eq!(snapshot, Some(SelectionDto { start: "14:00".to_string(), end: "15:00".to_string(), duration_minutes: 60 }));

    // Never held a value before, so a None is not a transition.
    assert!(!grid.sync_external_selection(None));
    assert!(grid.selection().is_some());

    assert!(!grid.sync_external_selection(snapshot));
    assert!(grid.selection().is_some());

    assert!(grid.sync_external_selection(None));
    assert!(grid.selection().is_none());
    assert_eq!(listener.last(), Some(None));
}

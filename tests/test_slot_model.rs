use chrono::{NaiveDate, NaiveDateTime};

use study_slot_grid::domain::slot_model::booked_interval::BookedInterval;
use study_slot_grid::domain::slot_model::operating_window::{HoursEntry, OperatingHours, OperatingWindow, resolve_operating_window};
use study_slot_grid::domain::slot_model::slot::generate_slots;
use study_slot_grid::domain::slot_model::time_of_day::{SLOT_GRANULARITY, TimeOfDay, minutes_to_time, time_to_minutes};

fn hm(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::from_hm(h, m)
}

fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
}

fn monday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 0, 0).unwrap()
}

#[test]
fn test_slot_count_matches_window_length() {
    let windows = [(hm(8, 0), hm(22, 0)), (hm(0, 0), TimeOfDay::END_OF_DAY), (hm(9, 30), hm(10, 15)), (hm(6, 45), hm(18, 0))];

    for (start, end) in windows {
        let window = OperatingWindow::new(start, end).unwrap();
        let slots = generate_slots(tuesday(), Some(&window), &[], monday_morning());

        assert_eq!(slots.len() as u32, (end.minutes() - start.minutes()) / SLOT_GRANULARITY, "window {}-{}", start, end);
        for slot in &slots {
            assert_eq!(slot.is_hour_boundary, slot.offset.minutes() % 60 == 0);
            assert!(!slot.is_blocked);
        }
    }
}

#[test]
fn test_time_round_trip_law() {
    for minutes in (0..1440).step_by(15) {
        let time = TimeOfDay::from_minutes(minutes);
        assert_eq!(time_to_minutes(&minutes_to_time(time)), time);
    }
    assert_eq!(time_to_minutes("23:59"), TimeOfDay::END_OF_DAY);
    assert_eq!(time_to_minutes(""), TimeOfDay::MIDNIGHT);
}

#[test]
fn test_booked_ticks_are_blocked() {
    let window = OperatingWindow::new(hm(8, 0), hm(22, 0)).unwrap();
    let booked = [BookedInterval::new(hm(10, 30), hm(12, 0))];

    let slots = generate_slots(tuesday(), Some(&window), &booked, monday_morning());
    let blocked: Vec<TimeOfDay> = slots.iter().filter(|s| s.is_blocked).map(|s| s.offset).collect();

    assert_eq!(blocked, vec![hm(10, 30), hm(10, 45), hm(11, 0), hm(11, 15), hm(11, 30), hm(11, 45)]);
}

#[test]
fn test_unsorted_and_overlapping_bookings_block_their_union() {
    let window = OperatingWindow::new(hm(8, 0), hm(22, 0)).unwrap();
    let booked = [
        BookedInterval::new(hm(15, 0), hm(16, 0)),
        BookedInterval::new(hm(9, 0), hm(10, 30)),
        BookedInterval::new(hm(10, 0), hm(11, 0)),
        BookedInterval::new(hm(13, 0), hm(12, 0)),
    ];

    let slots = generate_slots(tuesday(), Some(&window), &booked, monday_morning());

    for slot in &slots {
        let expected = booked.iter().any(|b| b.covers(slot.offset));
        assert_eq!(slot.is_blocked, expected, "tick {}", slot.offset);
    }
    assert_eq!(slots.iter().filter(|s| s.is_blocked).count(), 8 + 4);
}

#[test]
fn test_scenario_c_today_blocks_past_ticks() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let now = today.and_hms_opt(12, 30, 0).unwrap();
    let window = OperatingWindow::new(hm(8, 0), hm(22, 0)).unwrap();

    let slots = generate_slots(today, Some(&window), &[], now);

    assert_eq!(slots[0].offset, hm(12, 0));
    assert!(slots[0].is_blocked);
    assert!(slots[1].is_blocked);
    assert_eq!(slots[2].offset, hm(12, 30));
    assert!(!slots[2].is_blocked);
}

#[test]
fn test_generation_is_idempotent() {
    let window = OperatingWindow::new(hm(8, 0), hm(22, 0)).unwrap();
    let booked = [BookedInterval::new(hm(10, 30), hm(12, 0))];

    let first = generate_slots(tuesday(), Some(&window), &booked, monday_morning());
    let second = generate_slots(tuesday(), Some(&window), &booked, monday_morning());
    assert_eq!(first, second);
}

#[test]
fn test_scenario_e_weekend_without_hours_uses_weekday_window() {
    let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
    let hours = OperatingHours { weekday: HoursEntry::new(hm(8, 0), hm(22, 0)), weekend: None };

    let window = hours.window_for(saturday).unwrap();
    assert_eq!((window.start, window.end), (hm(8, 0), hm(22, 0)));

    let partial = HoursEntry { start: None, end: Some(hm(17, 0)) };
    let window = resolve_operating_window(saturday, &hours.weekday, Some(&partial)).unwrap();
    assert_eq!(window.end, hm(22, 0));
}

#[test]
fn test_closed_day_has_no_slots() {
    let hours = OperatingHours { weekday: HoursEntry::default(), weekend: None };
    let window = hours.window_for(tuesday());

    assert!(window.is_none());
    assert!(generate_slots(tuesday(), window.as_ref(), &[], monday_morning()).is_empty());
}

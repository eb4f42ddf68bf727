use almanac_core::store::DEFAULT_STORAGE_KEY;
use almanac_core::{
    CalendarState, DayKey, EventStore, FormError, FormOutcome, MemoryBackend,
};
use chrono::{NaiveDate, Weekday};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn key(year: i32, month: u32, day: u32) -> DayKey {
    DayKey::from_ymd(year, month, day).expect("valid date")
}

fn add_event(
    state: &mut CalendarState,
    store: &mut EventStore<MemoryBackend>,
    day: DayKey,
    title: &str,
    time: &str,
) {
    state.select_day(day);
    state.form.title = title.to_string();
    state.form.time = time.to_string();
    let outcome = state.submit(store).expect("submit event");
    assert_eq!(outcome, FormOutcome::Saved);
}

fn titles_on(store: &EventStore<MemoryBackend>, state: &CalendarState, day: u32) -> Vec<String> {
    state
        .grid(&store.load(), Weekday::Sun)
        .cell(day)
        .expect("day cell")
        .events
        .iter()
        .map(|pill| pill.title.clone())
        .collect()
}

#[test]
fn added_events_reload_sorted_by_time() {
    let mut store = EventStore::new(MemoryBackend::new());
    let mut state = CalendarState::new(date(2024, 5, 20));
    let day = key(2024, 5, 14);

    add_event(&mut state, &mut store, day, "Gym", "");
    add_event(&mut state, &mut store, day, "Call", "15:30");
    add_event(&mut state, &mut store, day, "Breakfast", "07:45");
    add_event(&mut state, &mut store, day, "Groceries", "");
    add_event(&mut state, &mut store, day, "Sync", "15:30");

    let reopened = EventStore::new(store.into_backend());
    assert_eq!(
        titles_on(&reopened, &state, 14),
        vec!["Breakfast", "Call", "Sync", "Gym", "Groceries"]
    );
}

#[test]
fn deleting_the_only_event_removes_the_day() {
    let mut store = EventStore::new(MemoryBackend::new());
    let mut state = CalendarState::new(date(2024, 5, 20));
    let day = key(2024, 5, 2);

    add_event(&mut state, &mut store, day, "Dentist", "10:00");
    assert!(state.open_event(&store.load(), day, 0));

    let outcome = state.delete(&mut store, || true).expect("delete");
    assert_eq!(outcome, FormOutcome::Deleted);
    assert!(state.selection.is_none());
    assert!(!store.load().contains_day(&day));
    assert_eq!(store.backend().raw(DEFAULT_STORAGE_KEY), Some("{}"));
}

#[test]
fn deleting_one_of_several_keeps_the_rest() {
    let mut store = EventStore::new(MemoryBackend::new());
    let mut state = CalendarState::new(date(2024, 5, 20));
    let day = key(2024, 5, 7);

    add_event(&mut state, &mut store, day, "Lunch", "");
    add_event(&mut state, &mut store, day, "Review", "13:00");
    add_event(&mut state, &mut store, day, "Standup", "09:00");
    add_event(&mut state, &mut store, day, "Retro", "16:00");

    assert!(state.open_event(&store.load(), day, 1));
    let outcome = state.delete(&mut store, || true).expect("delete");
    assert_eq!(outcome, FormOutcome::Deleted);

    let book = store.load();
    let stored: Vec<&str> = book.day(&day).iter().map(|event| event.title.as_str()).collect();
    assert_eq!(stored, vec!["Lunch", "Standup", "Retro"]);
    assert_eq!(titles_on(&store, &state, 7), vec!["Standup", "Retro", "Lunch"]);
}

#[test]
fn malformed_event_does_not_cost_other_days() {
    let mut store = EventStore::new(MemoryBackend::with_item(
        DEFAULT_STORAGE_KEY,
        r#"{"2024-03-05":[{"title":"Standup","time":"09:00"}],"2024-03-06":[{"title":"Legacy","time":null},{"title":"Broken","time":[]}]}"#,
    ));
    let mut state = CalendarState::new(date(2024, 3, 1));

    add_event(&mut state, &mut store, key(2024, 3, 20), "New", "");

    let book = store.load();
    assert_eq!(book.len(), 3);
    assert_eq!(book.day(&key(2024, 3, 5))[0].title, "Standup");
    assert_eq!(book.day(&key(2024, 3, 6))[0].title, "Legacy");
    assert_eq!(book.day(&key(2024, 3, 6)).len(), 1);
    assert_eq!(book.day(&key(2024, 3, 20))[0].title, "New");
}

#[test]
fn blank_title_leaves_storage_untouched() {
    let mut store = EventStore::new(MemoryBackend::new());
    let mut state = CalendarState::new(date(2024, 5, 20));
    let day = key(2024, 5, 9);
    add_event(&mut state, &mut store, day, "Standup", "09:00");
    let before = store.backend().raw(DEFAULT_STORAGE_KEY).map(str::to_string);

    state.select_day(day);
    state.form.title = " \t ".to_string();
    state.form.time = "11:00".to_string();
    let err = state.submit(&mut store).expect_err("blank title");

    assert!(matches!(err, FormError::EmptyTitle));
    assert!(state.form.is_open());
    assert_eq!(
        store.backend().raw(DEFAULT_STORAGE_KEY).map(str::to_string),
        before
    );
}

#[test]
fn editing_replaces_only_the_target_entry() {
    let mut store = EventStore::new(MemoryBackend::new());
    let mut state = CalendarState::new(date(2024, 5, 20));
    let day = key(2024, 5, 9);
    let other = key(2024, 5, 10);

    add_event(&mut state, &mut store, day, "Standup", "09:00");
    add_event(&mut state, &mut store, day, "Review", "13:00");
    add_event(&mut state, &mut store, day, "Retro", "16:00");
    add_event(&mut state, &mut store, other, "Offsite", "");
    let before = store.load();

    assert!(state.open_event(&before, day, 1));
    assert_eq!(state.form.title, "Review");
    state.form.title = "Design review".to_string();
    state.form.time = "14:00".to_string();
    state.submit(&mut store).expect("edit");

    let after = store.load();
    assert_eq!(after.day(&day)[0], before.day(&day)[0]);
    assert_eq!(after.day(&day)[2], before.day(&day)[2]);
    assert_eq!(after.day(&day)[1].title, "Design review");
    assert_eq!(after.day(&day)[1].time, "14:00");
    assert_eq!(after.day(&other), before.day(&other));
}

#[test]
fn next_then_prev_restores_the_month() {
    let mut store = EventStore::new(MemoryBackend::new());
    let mut state = CalendarState::new(date(2024, 12, 3));
    add_event(&mut state, &mut store, key(2024, 12, 25), "Dinner", "18:00");

    let book = store.load();
    let original = state.grid(&book, Weekday::Sun);

    state.next();
    assert_eq!(state.viewed_month, date(2025, 1, 1));
    assert_ne!(state.grid(&book, Weekday::Sun), original);

    state.prev();
    assert_eq!(state.grid(&book, Weekday::Sun), original);
}

#[test]
fn stored_blob_renders_sorted_pills() {
    let store = EventStore::new(MemoryBackend::with_item(
        DEFAULT_STORAGE_KEY,
        r#"{"2024-03-05":[{"title":"Standup","time":"09:00"},{"title":"Lunch","time":""}]}"#,
    ));
    let state = CalendarState::new(date(2024, 3, 1));
    let grid = state.grid(&store.load(), Weekday::Sun);

    assert_eq!(grid.label(), "March 2024");
    let cell = grid.cell(5).expect("day 5");
    assert_eq!(cell.key.to_string(), "2024-03-05");
    let pills: Vec<(&str, &str)> = cell
        .events
        .iter()
        .map(|pill| (pill.title.as_str(), pill.time.as_str()))
        .collect();
    assert_eq!(pills, vec![("Standup", "09:00"), ("Lunch", "")]);
}

#[test]
fn corrupt_blob_loads_as_empty() {
    let store = EventStore::new(MemoryBackend::with_item(
        DEFAULT_STORAGE_KEY,
        "{definitely not json",
    ));
    assert!(store.load().is_empty());

    let state = CalendarState::new(date(2024, 3, 1));
    let grid = state.grid(&store.load(), Weekday::Sun);
    assert!(grid.days.iter().all(|cell| cell.events.is_empty()));
}

mod common;

use common::{FakeForm, FixedGeo, SharedStore, home, tracker_with};
use rworkoutlog::core::tracker::{FlowState, SubmitOutcome};
use rworkoutlog::errors::AppError;
use rworkoutlog::models::{Coords, WorkoutDetails, WorkoutKind};
use rworkoutlog::persistence::{DEFAULT_STORAGE_KEY, KeyValueStore};

fn spot(lat: f64, lng: f64) -> Coords {
    Coords::new(lat, lng).unwrap()
}

#[test]
fn running_workout_is_stored_rendered_and_persisted() {
    let storage = SharedStore::default();
    let (mut tracker, map, sidebar) = tracker_with(storage.clone());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    let mut form = FakeForm::running("5", "30", "170");
    tracker.map_clicked(spot(45.47, 9.2), &mut form).unwrap();
    assert!(form.visible);

    let outcome = tracker.submit(&mut form).unwrap();
    let SubmitOutcome::Committed(id) = outcome else {
        panic!("expected commit, got {outcome:?}");
    };

    let w = tracker.store().find_by_id(id).unwrap();
    assert_eq!(w.details(), &WorkoutDetails::Running { cadence: 170, pace: 6.0 });

    assert_eq!(sidebar.entries.borrow().len(), 1);
    assert_eq!(sidebar.entries.borrow()[0].dom_id, id.to_string());
    assert_eq!(sidebar.entries.borrow()[0].details[2].value, "6.00");

    let markers = map.markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].0, spot(45.47, 9.2));
    assert_eq!(markers[0].2, "running-popup");

    assert!(!form.visible);
    assert_eq!(form.resets, 1);
    assert_eq!(tracker.state(), FlowState::Idle);
    assert!(tracker.clear_enabled());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_some());
}

#[test]
fn cycling_workout_gets_speed() {
    let (mut tracker, _map, _sidebar) = tracker_with(SharedStore::default());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    let mut form = FakeForm::cycling("20", "60", "150");
    tracker.map_clicked(spot(45.5, 9.3), &mut form).unwrap();
    let SubmitOutcome::Committed(id) = tracker.submit(&mut form).unwrap() else {
        panic!("expected commit");
    };
    let w = tracker.store().find_by_id(id).unwrap();
    assert_eq!(w.kind(), WorkoutKind::Cycling);
    assert_eq!(w.metric(), 20.0);
}

#[test]
fn zero_duration_is_rejected_and_keeps_the_click() {
    let storage = SharedStore::default();
    let (mut tracker, map, sidebar) = tracker_with(storage.clone());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    let click = spot(45.47, 9.2);
    let mut form = FakeForm::running("5", "0", "170");
    tracker.map_clicked(click, &mut form).unwrap();

    let outcome = tracker.submit(&mut form).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected(AppError::InvalidInput(_))));

    assert!(tracker.store().is_empty());
    assert!(sidebar.entries.borrow().is_empty());
    assert!(map.markers().is_empty());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    assert_eq!(tracker.state(), FlowState::AwaitingFormInput { coords: click });
    assert!(form.visible);

    // Fixing the form commits on the same coordinate without a second click.
    form.values.duration = "30".into();
    assert!(matches!(tracker.submit(&mut form).unwrap(), SubmitOutcome::Committed(_)));
    assert_eq!(map.markers()[0].0, click);
}

#[test]
fn submit_without_map_click_is_rejected() {
    let (mut tracker, _map, _sidebar) = tracker_with(SharedStore::default());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    let mut form = FakeForm::running("5", "30", "170");
    let outcome = tracker.submit(&mut form).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected(AppError::NoPendingLocation)));
    assert!(tracker.store().is_empty());
}

#[test]
fn same_tick_records_get_distinct_ids() {
    let (mut tracker, _map, _sidebar) = tracker_with(SharedStore::default());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let mut form = FakeForm::running("5", "30", "170");
        tracker.map_clicked(spot(45.0, 9.0), &mut form).unwrap();
        if let SubmitOutcome::Committed(id) = tracker.submit(&mut form).unwrap() {
            ids.push(id);
        }
    }
    assert_eq!(ids.len(), 3);
    assert!(ids[0] < ids[1] && ids[1] < ids[2]);
}

#[test]
fn reload_replays_in_creation_order() {
    let storage = SharedStore::default();
    {
        let (mut tracker, _map, _sidebar) = tracker_with(storage.clone());
        tracker.start(&FixedGeo(Some(home()))).unwrap();

        let mut run = FakeForm::running("5", "30", "170");
        tracker.map_clicked(spot(45.1, 9.1), &mut run).unwrap();
        tracker.submit(&mut run).unwrap();

        let mut ride = FakeForm::cycling("20", "60", "150");
        tracker.map_clicked(spot(45.2, 9.2), &mut ride).unwrap();
        tracker.submit(&mut ride).unwrap();
    }

    let (mut reloaded, map, sidebar) = tracker_with(storage.clone());
    let report = reloaded.start(&FixedGeo(Some(home()))).unwrap();
    assert_eq!(report.restored, 2);

    let entries = sidebar.entries.borrow();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, WorkoutKind::Running);
    assert_eq!(entries[1].kind, WorkoutKind::Cycling);

    let markers = map.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].0, spot(45.1, 9.1));
    assert_eq!(markers[1].0, spot(45.2, 9.2));

    // Ids survive the reload, so a sidebar click still resolves.
    let first = entries[0].dom_id.clone();
    drop(entries);
    assert_eq!(reloaded.select_entry(&first), Some(spot(45.1, 9.1)));
    assert_eq!(map.centers(), vec![(spot(45.1, 9.1), 13)]);

    // New records never reuse a restored id.
    let mut form = FakeForm::running("3", "20", "160");
    reloaded.map_clicked(spot(45.3, 9.3), &mut form).unwrap();
    let SubmitOutcome::Committed(id) = reloaded.submit(&mut form).unwrap() else {
        panic!("expected commit");
    };
    assert!(reloaded.store().all().filter(|w| w.id() == id).count() == 1);
    assert_eq!(reloaded.store().len(), 3);
}

#[test]
fn unknown_sidebar_id_is_a_no_op() {
    let (mut tracker, map, _sidebar) = tracker_with(SharedStore::default());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    assert_eq!(tracker.select_entry("12345"), None);
    assert_eq!(tracker.select_entry("not-an-id"), None);
    assert!(map.centers().is_empty());
}

#[test]
fn clear_all_wipes_store_snapshot_and_sidebar() {
    let storage = SharedStore::default();
    let (mut tracker, _map, sidebar) = tracker_with(storage.clone());
    tracker.start(&FixedGeo(Some(home()))).unwrap();
    assert!(!tracker.clear_enabled());

    let mut form = FakeForm::running("5", "30", "170");
    tracker.map_clicked(spot(45.0, 9.0), &mut form).unwrap();
    tracker.submit(&mut form).unwrap();

    assert_eq!(tracker.clear_all().unwrap(), 1);
    assert!(tracker.store().is_empty());
    assert!(sidebar.entries.borrow().is_empty());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    assert!(!tracker.clear_enabled());
    assert_eq!(tracker.clear_all().unwrap(), 0);

    let (mut reloaded, _map, _sidebar) = tracker_with(storage);
    let report = reloaded.start(&FixedGeo(Some(home()))).unwrap();
    assert_eq!(report.restored, 0);
}

#[test]
fn missing_location_disables_the_map_only() {
    let storage = SharedStore::default();
    {
        let (mut tracker, _map, _sidebar) = tracker_with(storage.clone());
        tracker.start(&FixedGeo(Some(home()))).unwrap();
        let mut form = FakeForm::running("5", "30", "170");
        tracker.map_clicked(spot(45.0, 9.0), &mut form).unwrap();
        tracker.submit(&mut form).unwrap();
    }

    let (mut tracker, map, sidebar) = tracker_with(storage);
    let report = tracker.start(&FixedGeo(None)).unwrap();
    assert!(!report.located);
    assert_eq!(report.restored, 1);
    assert_eq!(sidebar.entries.borrow().len(), 1);
    assert!(map.markers().is_empty());

    let mut form = FakeForm::running("5", "30", "170");
    let err = tracker.map_clicked(spot(45.0, 9.0), &mut form).unwrap_err();
    assert!(matches!(err, AppError::MapUnavailable));
    assert_eq!(tracker.state(), FlowState::Idle);
    assert!(!form.visible);
}

#[test]
fn corrupt_snapshot_starts_empty_and_is_wiped() {
    let mut storage = SharedStore::default();
    storage.set(DEFAULT_STORAGE_KEY, "[{\"type\":\"running\"}]").unwrap();

    let (mut tracker, _map, sidebar) = tracker_with(storage.clone());
    let report = tracker.start(&FixedGeo(Some(home()))).unwrap();
    assert!(report.discarded_corrupt);
    assert!(tracker.store().is_empty());
    assert!(sidebar.entries.borrow().is_empty());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn failed_save_rolls_back_the_add() {
    let storage = SharedStore::default();
    let (mut tracker, map, sidebar) = tracker_with(storage.clone());
    tracker.start(&FixedGeo(Some(home()))).unwrap();

    *storage.fail_writes.borrow_mut() = true;
    let mut form = FakeForm::running("5", "30", "170");
    let click = spot(45.0, 9.0);
    tracker.map_clicked(click, &mut form).unwrap();

    assert!(matches!(tracker.submit(&mut form), Err(AppError::Io(_))));
    assert!(tracker.store().is_empty());
    assert!(sidebar.entries.borrow().is_empty());
    assert!(map.markers().is_empty());
    assert_eq!(tracker.state(), FlowState::AwaitingFormInput { coords: click });
}

#[test]
fn out_of_range_click_is_refused() {
    let (mut tracker, _map, _sidebar) = tracker_with(SharedStore::default());
    tracker.start(&FixedGeo(Some(home()))).unwrap();
    let mut form = FakeForm::running("5", "30", "170");
    let err = tracker
        .map_clicked(Coords { lat: 120.0, lng: 9.0 }, &mut form)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(tracker.state(), FlowState::Idle);
}

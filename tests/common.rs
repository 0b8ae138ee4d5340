#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use rworkoutlog::core::create::FormValues;
use rworkoutlog::core::id::{FixedClock, IdGenerator};
use rworkoutlog::core::tracker::Tracker;
use rworkoutlog::errors::{AppError, AppResult};
use rworkoutlog::models::{Coords, WorkoutKind};
use rworkoutlog::persistence::{
    DEFAULT_STORAGE_KEY, KeyValueStore, MemoryStore, PersistenceAdapter,
};
use rworkoutlog::view::{
    FormSurface, Geolocation, MapView, Sidebar, SidebarEntry, ViewSynchronizer,
};

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworkoutlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkoutlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB with a home location so the map is available
pub fn init_db_with_home(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init", "--lat", "45.4642", "--lng", "9.19"])
        .assert()
        .success();
}

pub fn add_running(db_path: &str, distance: &str, duration: &str, cadence: &str) {
    rwl()
        .args([
            "--db", db_path, "--test", "add", "running", "--lat", "45.47", "--lng", "9.2",
            "--distance", distance, "--duration", duration, "--cadence", cadence,
        ])
        .assert()
        .success();
}

pub fn add_cycling(db_path: &str, distance: &str, duration: &str, elevation: &str) {
    rwl()
        .args([
            "--db", db_path, "--test", "add", "cycling", "--lat", "45.5", "--lng", "9.3",
            "--distance", distance, "--duration", duration, "--elevation", elevation,
        ])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// In-memory capabilities for library-level tests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Init(Coords, u8),
    Marker(Coords, String, String),
    Center(Coords, u8),
}

/// Map fake; calls are shared so tests can inspect them after handing the
/// map to a tracker.
#[derive(Default, Clone)]
pub struct FakeMap {
    pub calls: Rc<RefCell<Vec<MapCall>>>,
    ready: bool,
}

impl FakeMap {
    pub fn markers(&self) -> Vec<(Coords, String, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                MapCall::Marker(at, p, s) => Some((*at, p.clone(), s.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn centers(&self) -> Vec<(Coords, u8)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                MapCall::Center(at, z) => Some((*at, *z)),
                _ => None,
            })
            .collect()
    }
}

impl MapView for FakeMap {
    fn initialize(&mut self, center: Coords, zoom: u8) {
        self.ready = true;
        self.calls.borrow_mut().push(MapCall::Init(center, zoom));
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn place_marker(&mut self, at: Coords, popup_text: &str, style_class: &str) {
        self.calls.borrow_mut().push(MapCall::Marker(
            at,
            popup_text.to_string(),
            style_class.to_string(),
        ));
    }

    fn center_on(&mut self, at: Coords, zoom: u8) {
        self.calls.borrow_mut().push(MapCall::Center(at, zoom));
    }
}

#[derive(Default, Clone)]
pub struct FakeSidebar {
    pub entries: Rc<RefCell<Vec<SidebarEntry>>>,
}

impl Sidebar for FakeSidebar {
    fn push_entry(&mut self, entry: SidebarEntry) {
        self.entries.borrow_mut().push(entry);
    }

    fn clear(&mut self) {
        self.entries.borrow_mut().clear();
    }
}

pub struct FixedGeo(pub Option<Coords>);

impl Geolocation for FixedGeo {
    fn current_position(&self) -> AppResult<Coords> {
        self.0.ok_or_else(|| AppError::GeolocationUnavailable("denied".into()))
    }
}

#[derive(Default)]
pub struct FakeForm {
    pub values: FormValues,
    pub visible: bool,
    pub resets: usize,
    pub layout: Option<WorkoutKind>,
}

impl FakeForm {
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            values: FormValues {
                kind: "running".into(),
                distance: distance.into(),
                duration: duration.into(),
                cadence: cadence.into(),
                elevation: String::new(),
            },
            ..Self::default()
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            values: FormValues {
                kind: "cycling".into(),
                distance: distance.into(),
                duration: duration.into(),
                cadence: String::new(),
                elevation: elevation.into(),
            },
            ..Self::default()
        }
    }
}

impl FormSurface for FakeForm {
    fn values(&self) -> FormValues {
        self.values.clone()
    }

    fn reset(&mut self) {
        self.resets += 1;
        self.values = FormValues::default();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_kind(&mut self, kind: WorkoutKind) {
        self.layout = Some(kind);
    }
}

/// Key/value store shared between trackers, to simulate a page reload.
#[derive(Default, Clone)]
pub struct SharedStore {
    pub inner: Rc<RefCell<MemoryStore>>,
    pub fail_writes: Rc<RefCell<bool>>,
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if *self.fail_writes.borrow() {
            return Err(AppError::Io(std::io::Error::other("disk full")));
        }
        self.inner.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.inner.borrow_mut().remove(key)
    }
}

pub type TestTracker = Tracker<SharedStore, FakeMap, FakeSidebar>;

pub fn home() -> Coords {
    Coords::new(45.4642, 9.19).unwrap()
}

/// Tracker over the given storage with a frozen clock (every record is
/// created in the same millisecond).
pub fn tracker_with(store: SharedStore) -> (TestTracker, FakeMap, FakeSidebar) {
    let map = FakeMap::default();
    let sidebar = FakeSidebar::default();
    let t = chrono::DateTime::parse_from_rfc3339("2026-03-07T08:30:00+01:00")
        .unwrap()
        .with_timezone(&chrono::Local);
    let tracker = Tracker::new(
        PersistenceAdapter::new(store, DEFAULT_STORAGE_KEY),
        ViewSynchronizer::new(map.clone(), sidebar.clone()),
        IdGenerator::new(Box::new(FixedClock(t))),
    );
    (tracker, map, sidebar)
}

pub mod add;
pub mod clear;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::config::Config;
use crate::core::id::IdGenerator;
use crate::core::tracker::Tracker;
use crate::db::kv::SqliteStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::Coords;
use crate::persistence::{KeyValueStore, PersistenceAdapter};
use crate::ui::messages::warning;
use crate::ui::terminal::{SavedLocation, TerminalMap, TerminalSidebar};
use crate::view::ViewSynchronizer;

/// Key of the saved home location in the `kv` table.
pub const HOME_KEY: &str = "home";

pub type TerminalTracker = Tracker<SqliteStore, TerminalMap, TerminalSidebar>;

/// Saved home location; an unreadable value counts as none.
pub fn read_home(kv: &SqliteStore) -> AppResult<Option<Coords>> {
    let Some(raw) = kv.get(HOME_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Coords>(&raw) {
        Ok(c) if c.is_valid() => Ok(Some(c)),
        _ => {
            warning(format!("Ignoring unreadable home location '{raw}'"));
            Ok(None)
        }
    }
}

pub fn write_home(kv: &mut SqliteStore, home: Coords) -> AppResult<()> {
    kv.set(HOME_KEY, &serde_json::to_string(&home)?)
}

/// Open the database and run the startup sequence: locate, show the map,
/// restore and replay saved workouts.
pub fn open_session(cfg: &Config) -> AppResult<TerminalTracker> {
    let kv = SqliteStore::open(&cfg.database)?;
    let home = read_home(&kv)?;

    let persistence = PersistenceAdapter::new(kv, cfg.storage_key.clone());
    let views = ViewSynchronizer::new(TerminalMap::new(), TerminalSidebar::new())
        .with_zoom(cfg.map_zoom);
    let mut tracker = Tracker::new(persistence, views, IdGenerator::system());

    let report = tracker.start(&SavedLocation::new(home))?;
    if report.discarded_corrupt {
        let conn = tracker.persistence().backend().conn();
        if let Err(e) = ttlog(
            conn,
            "corrupt",
            &cfg.storage_key,
            "Unreadable workout snapshot discarded",
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    Ok(tracker)
}

use super::KeyValueStore;
use super::snapshot::SnapshotRecord;
use crate::core::store::WorkoutStore;
use crate::errors::{AppError, AppResult};
use crate::models::Workout;
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// Saves and restores the whole store as one JSON snapshot under a fixed key.
pub struct PersistenceAdapter<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Overwrite the snapshot with the full ordered contents of `store`.
    pub fn save(&mut self, store: &WorkoutStore) -> AppResult<()> {
        let records: Vec<SnapshotRecord> = store.all().map(SnapshotRecord::from).collect();
        let json = serde_json::to_string(&records)?;
        self.backend.set(&self.key, &json)
    }

    /// Read the snapshot back. No snapshot is an empty list; anything
    /// unreadable or invalid is `CorruptData`.
    pub fn load(&self) -> AppResult<Vec<Workout>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let records: Vec<SnapshotRecord> = serde_json::from_str(&raw)
            .map_err(|e| AppError::CorruptData(format!("snapshot '{}': {e}", self.key)))?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut out = Vec::with_capacity(records.len());
        for (pos, rec) in records.into_iter().enumerate() {
            let id = rec.id();
            if !seen.insert(id) {
                return Err(AppError::CorruptData(format!(
                    "record #{} repeats id {id}",
                    pos + 1
                )));
            }
            let w = rec.into_workout().map_err(|e| {
                AppError::CorruptData(format!("record #{} (id {id}): {e}", pos + 1))
            })?;
            out.push(w);
        }
        Ok(out)
    }

    /// Drop the snapshot key entirely.
    pub fn wipe(&mut self) -> AppResult<()> {
        self.backend.remove(&self.key)
    }
}

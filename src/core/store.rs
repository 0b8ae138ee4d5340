use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutId};
use std::collections::HashMap;

/// Workouts in creation order, with an id index for lookups.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    records: Vec<Workout>,
    index: HashMap<WorkoutId, usize>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Existing entries never move.
    pub fn add(&mut self, record: Workout) -> AppResult<()> {
        let id = record.id();
        if self.index.contains_key(&id) {
            return Err(AppError::DuplicateId(id.to_string()));
        }
        self.index.insert(id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn find_by_id(&self, id: WorkoutId) -> AppResult<&Workout> {
        self.index
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Remove the most recently added record; used to roll back an add
    /// whose snapshot could not be written.
    pub(crate) fn pop(&mut self) -> Option<Workout> {
        let w = self.records.pop()?;
        self.index.remove(&w.id());
        Some(w)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// Replace the contents with a restored snapshot. On duplicate ids the
    /// store is left untouched.
    pub fn restore(&mut self, records: Vec<Workout>) -> AppResult<()> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, w) in records.iter().enumerate() {
            if index.insert(w.id(), pos).is_some() {
                return Err(AppError::DuplicateId(w.id().to_string()));
            }
        }
        self.records = records;
        self.index = index;
        Ok(())
    }

    /// Records in insertion order. The iterator is `Clone`, so a caller can
    /// walk the sequence more than once.
    pub fn all(&self) -> std::slice::Iter<'_, Workout> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&Workout> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! On-disk shape of a workout.
//!
//! ```json
//! [{"type":"running","id":"1772868600000","coords":{"lat":45.0,"lng":9.0},
//!   "distance":5.0,"duration":30.0,"created_at":"2026-03-07T08:30:00+01:00",
//!   "cadence":170,"pace":6.0}]
//! ```
//!
//! `pace` / `speed` are written for readers of the raw value only; loading
//! recomputes them from distance and duration.

use crate::core::create::{WorkoutDraft, create_record};
use crate::errors::AppResult;
use crate::models::{Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SnapshotRecord {
    Running {
        id: WorkoutId,
        coords: Coords,
        distance: f64,
        duration: f64,
        created_at: DateTime<Local>,
        cadence: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pace: Option<f64>,
    },
    Cycling {
        id: WorkoutId,
        coords: Coords,
        distance: f64,
        duration: f64,
        created_at: DateTime<Local>,
        elevation_gain: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<f64>,
    },
}

impl From<&Workout> for SnapshotRecord {
    fn from(w: &Workout) -> Self {
        match *w.details() {
            WorkoutDetails::Running { cadence, pace } => SnapshotRecord::Running {
                id: w.id(),
                coords: w.coords(),
                distance: w.distance(),
                duration: w.duration(),
                created_at: w.created_at(),
                cadence,
                pace: Some(pace),
            },
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            } => SnapshotRecord::Cycling {
                id: w.id(),
                coords: w.coords(),
                distance: w.distance(),
                duration: w.duration(),
                created_at: w.created_at(),
                elevation_gain,
                speed: Some(speed),
            },
        }
    }
}

impl SnapshotRecord {
    pub fn id(&self) -> WorkoutId {
        match self {
            SnapshotRecord::Running { id, .. } | SnapshotRecord::Cycling { id, .. } => *id,
        }
    }

    /// Rebuild the typed record through the same validation as a form
    /// submission. Stored derived metrics are discarded.
    pub fn into_workout(self) -> AppResult<Workout> {
        let (draft, id, created_at) = match self {
            SnapshotRecord::Running {
                id,
                coords,
                distance,
                duration,
                created_at,
                cadence,
                ..
            } => (
                WorkoutDraft {
                    kind: WorkoutKind::Running,
                    coords,
                    distance,
                    duration,
                    variant_field: f64::from(cadence),
                },
                id,
                created_at,
            ),
            SnapshotRecord::Cycling {
                id,
                coords,
                distance,
                duration,
                created_at,
                elevation_gain,
                ..
            } => (
                WorkoutDraft {
                    kind: WorkoutKind::Cycling,
                    coords,
                    distance,
                    duration,
                    variant_field: elevation_gain,
                },
                id,
                created_at,
            ),
        };
        create_record(&draft, id, created_at)
    }
}

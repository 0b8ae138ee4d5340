use super::{coords::Coords, workout_id::WorkoutId, workout_kind::WorkoutKind};
use crate::utils::formatting::round2;
use chrono::{DateTime, Local};

/// Variant-specific part of a workout.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetails {
    Running { cadence: u32, pace: f64 },     // pace in min/km
    Cycling { elevation_gain: f64, speed: f64 }, // speed in km/h
}

/// One logged workout.
///
/// Built only through `core::create::create_record`, which validates the
/// inputs; no setters exist, so the derived metric cannot drift from
/// `distance` and `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    coords: Coords,
    distance: f64, // km
    duration: f64, // min
    created_at: DateTime<Local>,
    details: WorkoutDetails,
}

/// `duration / distance`, two decimals.
pub fn pace(distance: f64, duration: f64) -> f64 {
    round2(duration / distance)
}

/// `distance / hours`, two decimals.
pub fn speed(distance: f64, duration: f64) -> f64 {
    round2(distance / (duration / 60.0))
}

impl Workout {
    pub(crate) fn running(
        id: WorkoutId,
        coords: Coords,
        distance: f64,
        duration: f64,
        created_at: DateTime<Local>,
        cadence: u32,
    ) -> Self {
        Self {
            id,
            coords,
            distance,
            duration,
            created_at,
            details: WorkoutDetails::Running {
                cadence,
                pace: pace(distance, duration),
            },
        }
    }

    pub(crate) fn cycling(
        id: WorkoutId,
        coords: Coords,
        distance: f64,
        duration: f64,
        created_at: DateTime<Local>,
        elevation_gain: f64,
    ) -> Self {
        Self {
            id,
            coords,
            distance,
            duration,
            created_at,
            details: WorkoutDetails::Cycling {
                elevation_gain,
                speed: speed(distance, duration),
            },
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Pace for running, speed for cycling.
    pub fn metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { pace, .. } => pace,
            WorkoutDetails::Cycling { speed, .. } => speed,
        }
    }

    /// Cadence for running, elevation gain for cycling.
    pub fn variant_field(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => f64::from(cadence),
            WorkoutDetails::Cycling { elevation_gain, .. } => elevation_gain,
        }
    }

    /// Title shared by the map popup and the sidebar entry,
    /// e.g. "Running on 07/3/2026".
    pub fn description(&self) -> String {
        format!(
            "{} on {}",
            self.kind().label(),
            self.created_at.format("%d/%-m/%Y")
        )
    }
}

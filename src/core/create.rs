use crate::errors::{AppError, AppResult};
use crate::models::{Coords, Workout, WorkoutId, WorkoutKind};
use chrono::{DateTime, Local};

/// Parsed but not yet validated form submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutDraft {
    pub kind: WorkoutKind,
    pub coords: Coords,
    pub distance: f64,
    pub duration: f64,
    /// Cadence (running) or elevation gain (cycling).
    pub variant_field: f64,
}

/// Raw field values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Numeric coercion of a form field: blank is 0, garbage is NaN.
pub fn parse_form_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

impl FormValues {
    /// Pair the submitted values with the captured map coordinate.
    pub fn to_draft(&self, coords: Coords) -> AppResult<WorkoutDraft> {
        let kind = WorkoutKind::from_code(&self.kind).ok_or_else(|| {
            AppError::InvalidInput(format!("unknown workout type '{}'", self.kind))
        })?;

        let variant_raw = match kind {
            WorkoutKind::Running => &self.cadence,
            WorkoutKind::Cycling => &self.elevation,
        };

        Ok(WorkoutDraft {
            kind,
            coords,
            distance: parse_form_number(&self.distance),
            duration: parse_form_number(&self.duration),
            variant_field: parse_form_number(variant_raw),
        })
    }
}

fn require_positive(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{name} must be a positive number (got {value})"
        )))
    }
}

/// Validate a draft and build the record.
///
/// Distance and duration must be finite and > 0. Running cadence must be a
/// positive whole number; cycling elevation gain only has to be finite.
/// The derived pace or speed must be finite as well.
pub fn create_record(
    draft: &WorkoutDraft,
    id: WorkoutId,
    created_at: DateTime<Local>,
) -> AppResult<Workout> {
    let w = build_record(draft, id, created_at)?;
    if !w.metric().is_finite() {
        let metric = match w.kind() {
            WorkoutKind::Running => "pace",
            WorkoutKind::Cycling => "speed",
        };
        return Err(AppError::InvalidInput(format!(
            "{metric} out of range for distance {} and duration {}",
            draft.distance,
            draft.duration
        )));
    }
    Ok(w)
}

fn build_record(
    draft: &WorkoutDraft,
    id: WorkoutId,
    created_at: DateTime<Local>,
) -> AppResult<Workout> {
    if !draft.coords.is_valid() {
        return Err(AppError::InvalidInput(format!(
            "coordinates out of range: {}",
            draft.coords
        )));
    }
    require_positive("distance", draft.distance)?;
    require_positive("duration", draft.duration)?;

    match draft.kind {
        WorkoutKind::Running => {
            let cadence = draft.variant_field;
            require_positive("cadence", cadence)?;
            if cadence.fract() != 0.0 || cadence > f64::from(u32::MAX) {
                return Err(AppError::InvalidInput(format!(
                    "cadence must be a whole number of steps per minute (got {cadence})"
                )));
            }
            Ok(Workout::running(
                id,
                draft.coords,
                draft.distance,
                draft.duration,
                created_at,
                cadence as u32,
            ))
        }
        WorkoutKind::Cycling => {
            let elevation = draft.variant_field;
            if !elevation.is_finite() {
                return Err(AppError::InvalidInput(format!(
                    "elevation gain must be a number (got {elevation})"
                )));
            }
            Ok(Workout::cycling(
                id,
                draft.coords,
                draft.distance,
                draft.duration,
                created_at,
                elevation,
            ))
        }
    }
}

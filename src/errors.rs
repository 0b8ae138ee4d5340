//! Unified application error type.
//! Every module (models, core, persistence, view, cli) returns AppError so
//! the terminal front-end can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database / serialization
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Workout domain
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No workout with id {0}")]
    NotFound(String),

    #[error("Workout id {0} is already in the store")]
    DuplicateId(String),

    #[error("Stored workouts are unreadable: {0}")]
    CorruptData(String),

    // ---------------------------
    // Map / geolocation
    // ---------------------------
    #[error("Unable to determine your location: {0}")]
    GeolocationUnavailable(String),

    #[error("The map is not available (no location fix)")]
    MapUnavailable,

    #[error("Pick a location on the map before submitting the form")]
    NoPendingLocation,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// True for errors the creation flow recovers from locally by
    /// re-prompting the user.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::NoPendingLocation)
    }
}

pub type AppResult<T> = Result<T, AppError>;

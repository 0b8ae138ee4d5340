use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the map, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    /// Build a coordinate pair, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        let c = Self { lat, lng };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(AppError::InvalidInput(format!(
                "coordinates out of range: lat={lat}, lng={lng}"
            )))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

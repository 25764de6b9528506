//! Coordinates and closeness scores
//!
//! Coordinates are plain latitude/longitude-shaped pairs. Nothing here models
//! the shape of the Earth; see [`distance`] for the score used by search.

pub mod distance;

use crate::constants::geo::{MAX_LAT, MAX_LNG};
use crate::error::{Error, Result};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// A coordinate pair (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Draw a random pair from the latitude/longitude-shaped range
    pub fn random(rng: &dyn RandomSource) -> Self {
        Self {
            lat: rng.uniform(-MAX_LAT, MAX_LAT),
            lng: rng.uniform(-MAX_LNG, MAX_LNG),
        }
    }

    /// Validate user-supplied coordinates
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(Error::Validation(format!(
                "Coordinates ({}, {}) must be finite numbers",
                self.lat, self.lng
            )));
        }
        if self.lat < -MAX_LAT || self.lat > MAX_LAT {
            return Err(Error::Validation(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -MAX_LNG || self.lng > MAX_LNG {
            return Err(Error::Validation(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"` and validates the result
impl std::str::FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| Error::Validation(format!("Expected \"lat,lng\", got \"{}\"", s)))?;

        let parse = |part: &str, what: &str| -> Result<f64> {
            part.trim()
                .parse::<f64>()
                .map_err(|_| Error::Validation(format!("Invalid {}: {}", what, part.trim())))
        };

        let coords = Self::new(parse(lat, "latitude")?, parse(lng, "longitude")?);
        coords.validate()?;
        Ok(coords)
    }
}

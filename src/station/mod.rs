//! Charging stations
//!
//! A station has a name, a location, a charging speed, an hourly price and
//! its own availability table. Only the booking engine mutates the table.

pub mod slots;

use crate::coord::distance::closeness_score;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
pub use slots::{slot_label, Slot, SlotTable};

/// Charging speed category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    Fast,
    Slow,
}

impl Speed {
    /// Pick a speed with equal odds
    pub fn random(rng: &dyn RandomSource) -> Self {
        if rng.coin() {
            Self::Fast
        } else {
            Self::Slow
        }
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fast => write!(f, "Fast"),
            Self::Slow => write!(f, "Slow"),
        }
    }
}

impl std::str::FromStr for Speed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "slow" => Ok(Self::Slow),
            _ => Err(Error::Validation(format!(
                "Unknown charging speed: {} (expected Fast or Slow)",
                s
            ))),
        }
    }
}

/// A charging station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub location: Coordinates,
    pub speed: Speed,
    pub price_per_hour: f64,
    slots: SlotTable,
}

impl Station {
    /// Create a station from explicit parts
    ///
    /// The hourly price must be a positive finite number.
    pub fn new(
        name: impl Into<String>,
        location: Coordinates,
        speed: Speed,
        price_per_hour: f64,
        slots: SlotTable,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation("Station name must not be empty".to_string()));
        }
        if !price_per_hour.is_finite() || price_per_hour <= 0.0 {
            return Err(Error::Validation(format!(
                "Price per hour must be positive, got {}",
                price_per_hour
            )));
        }
        Ok(Self {
            name,
            location,
            speed,
            price_per_hour,
            slots,
        })
    }

    // Generation has already validated the price range
    pub(crate) fn generated(
        name: String,
        location: Coordinates,
        speed: Speed,
        price_per_hour: f64,
        slots: SlotTable,
    ) -> Self {
        Self {
            name,
            location,
            speed,
            price_per_hour,
            slots,
        }
    }

    /// Availability table
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut SlotTable {
        &mut self.slots
    }

    /// Closeness score from `from` to this station
    pub fn distance_from(&self, from: Coordinates) -> f64 {
        closeness_score(self.location, from)
    }
}

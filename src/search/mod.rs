//! Station search
//!
//! Filters the catalog by closeness score, charging speed and availability.
//! Results come back in catalog order unless distance ordering is asked for.

use crate::booking::User;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::station::{Speed, Station};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Same order as the catalog
    #[default]
    Catalog,
    /// Closest first, ties keep catalog order
    Distance,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::Distance => write!(f, "distance"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "catalog" => Ok(Self::Catalog),
            "distance" | "nearest" => Ok(Self::Distance),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Active search filters
///
/// A `None` filter is off. `max_distance: Some(0.0)` is an active filter that
/// keeps only stations at exactly distance 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchFilters {
    /// Keep stations with distance <= this value
    pub max_distance: Option<f64>,
    /// Keep stations of this speed only
    pub speed: Option<Speed>,
    /// Keep stations with at least one free slot
    pub require_availability: bool,
    pub sort: SortOrder,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            max_distance: None,
            speed: None,
            require_availability: true,
            sort: SortOrder::Catalog,
        }
    }
}

impl SearchFilters {
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_availability(mut self, require_availability: bool) -> Self {
        self.require_availability = require_availability;
        self
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    fn accepts(&self, station: &Station, distance: f64) -> bool {
        if let Some(max) = self.max_distance {
            if distance > max {
                return false;
            }
        }
        if let Some(speed) = self.speed {
            if station.speed != speed {
                return false;
            }
        }
        if self.require_availability && !station.slots().any_available() {
            return false;
        }
        true
    }
}

/// A station that passed the filters, with its closeness score
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub station: &'a Station,
    pub distance: f64,
}

/// Find stations for `user` that pass every active filter
///
/// An empty result is a normal outcome.
pub fn find_stations<'a>(
    user: &User,
    catalog: &'a Catalog,
    filters: &SearchFilters,
) -> Vec<SearchHit<'a>> {
    let mut hits: Vec<SearchHit<'a>> = catalog
        .iter()
        .filter_map(|station| {
            let distance = station.distance_from(user.location);
            filters
                .accepts(station, distance)
                .then_some(SearchHit { station, distance })
        })
        .collect();

    if filters.sort == SortOrder::Distance {
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    debug!(
        user = %user.name,
        matches = hits.len(),
        of = catalog.len(),
        "Station search"
    );
    hits
}

/// Parse a user-entered distance limit
///
/// Blank input means no limit. Anything else must be a finite, non-negative
/// number; `0` is kept as an active limit.
pub fn parse_max_distance(input: &str) -> Result<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::Validation(format!("Invalid distance: {}", trimmed)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(format!(
            "Distance must be a non-negative number, got {}",
            trimmed
        )));
    }
    Ok(Some(value))
}

/// Parse a user-entered speed filter, blank meaning any speed
pub fn parse_speed_filter(input: &str) -> Result<Option<Speed>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

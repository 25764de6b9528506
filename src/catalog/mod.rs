//! Station catalog
//!
//! The catalog is generated once per run and owns every station. Stations
//! are kept in generation order alongside a name index for O(1) lookup.

use crate::booking::{book_slots, BookingOutcome, User};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::station::{SlotTable, Speed, Station};
use std::collections::HashMap;
use tracing::{debug, info};

/// Default lower bound for the hourly price
pub const DEFAULT_MIN_PRICE: f64 = 10.0;

/// Default upper bound for the hourly price
pub const DEFAULT_MAX_PRICE: f64 = 30.0;

/// Tunables for catalog generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    /// Lowest hourly price a station can get
    pub min_price: f64,
    /// Highest hourly price a station can get
    pub max_price: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl GenerationSettings {
    /// Check the price range is positive and ordered
    pub fn validate(&self) -> Result<()> {
        if !self.min_price.is_finite() || !self.max_price.is_finite() {
            return Err(Error::Validation("Price range must be finite".to_string()));
        }
        if self.min_price <= 0.0 {
            return Err(Error::Validation(format!(
                "Minimum price must be positive, got {}",
                self.min_price
            )));
        }
        if self.min_price > self.max_price {
            return Err(Error::Validation(format!(
                "Minimum price {} exceeds maximum price {}",
                self.min_price, self.max_price
            )));
        }
        Ok(())
    }
}

/// Name of the station at `index`: "Station A" .. "Station Z", then
/// "Station AA", "Station AB", ...
pub fn station_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    let suffix: String = letters.into_iter().rev().collect();
    format!("Station {}", suffix)
}

/// Generate `count` random stations with the default price range
///
/// `start_hour` is the wall-clock hour the availability tables begin at.
pub fn generate_stations(count: usize, start_hour: u8, rng: &dyn RandomSource) -> Catalog {
    let stations = (0..count)
        .map(|i| random_station(station_name(i), start_hour, &GenerationSettings::default(), rng))
        .collect();
    info!(count, start_hour, "Generated station catalog");
    Catalog::from_generated(stations)
}

/// Generate `count` random stations with custom settings
pub fn generate_stations_with(
    count: usize,
    start_hour: u8,
    settings: &GenerationSettings,
    rng: &dyn RandomSource,
) -> Result<Catalog> {
    settings.validate()?;
    let stations = (0..count)
        .map(|i| random_station(station_name(i), start_hour, settings, rng))
        .collect();
    info!(
        count,
        start_hour,
        min_price = settings.min_price,
        max_price = settings.max_price,
        "Generated station catalog"
    );
    Ok(Catalog::from_generated(stations))
}

fn random_station(
    name: String,
    start_hour: u8,
    settings: &GenerationSettings,
    rng: &dyn RandomSource,
) -> Station {
    let location = Coordinates::random(rng);
    let speed = Speed::random(rng);
    let price = (rng.uniform(settings.min_price, settings.max_price) * 100.0).round() / 100.0;
    let slots = SlotTable::generate(start_hour, rng);

    debug!(
        station = %name,
        %location,
        %speed,
        price,
        free_slots = slots.available_count(),
        "Generated station"
    );

    // Rounding can pull a tiny range below the floor
    Station::generated(name, location, speed, price.max(settings.min_price), slots)
}

/// All stations of a run
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stations: Vec<Station>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from explicit stations, rejecting duplicate names
    pub fn from_stations(stations: Vec<Station>) -> Result<Self> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.name.clone(), i).is_some() {
                return Err(Error::Validation(format!(
                    "Duplicate station name: {}",
                    station.name
                )));
            }
        }
        Ok(Self { stations, index })
    }

    // Generated names are unique by construction
    fn from_generated(stations: Vec<Station>) -> Self {
        let index = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        Self { stations, index }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate stations in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Look up a station by exact name
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.index.get(name).map(|&i| &self.stations[i])
    }

    /// Look up a station by exact name, failing with `NotFound`
    pub fn find(&self, name: &str) -> Result<&Station> {
        self.get(name).ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Mutable lookup, failing with `NotFound`
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Station> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.stations[i]),
            None => Err(Error::NotFound(name.to_string())),
        }
    }

    /// Book `count` slots at the station called `station_name`
    ///
    /// An unknown name fails before any table is touched.
    pub fn book(
        &mut self,
        user: &User,
        station_name: &str,
        count: u32,
        rng: &dyn RandomSource,
    ) -> Result<BookingOutcome> {
        let station = self.find_mut(station_name)?;
        book_slots(user, station, count, rng)
    }
}

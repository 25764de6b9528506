//! Per-run state shared by the catalog commands
//!
//! A session is created once per process: it picks the random source,
//! generates the catalog and fixes the user's location.

use crate::booking::User;
use crate::catalog::{generate_stations_with, Catalog};
use crate::cli::RunOptions;
use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::format::{get_formatter, OutputFormatter};
use crate::random::{source_for, RandomSource};
use crate::search::SearchFilters;
use chrono::Timelike;
use tracing::debug;

/// Everything a command needs to search and book
pub struct Session {
    pub catalog: Catalog,
    pub rng: Box<dyn RandomSource>,
    pub formatter: Box<dyn OutputFormatter>,
    /// Base filters from config; commands layer their own on top
    pub filters: SearchFilters,
    /// Where the user is
    pub location: Coordinates,
}

impl Session {
    /// Build a session from config and command-line overrides
    pub fn start(options: &RunOptions, config: &Config) -> Result<Self> {
        let seed = options.seed.or(config.defaults.seed);
        let rng = source_for(seed);

        let format = options
            .format
            .clone()
            .unwrap_or_else(|| config.defaults.format.clone());
        let formatter = get_formatter(&format)
            .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

        let count = options.stations.unwrap_or(config.defaults.stations);
        let start_hour = chrono::Local::now().hour() as u8;
        let catalog =
            generate_stations_with(count, start_hour, &config.generation_settings(), rng.as_ref())?;

        let location = match (options.lat, options.lng) {
            (Some(lat), Some(lng)) => {
                let location = Coordinates::new(lat, lng);
                location.validate()?;
                location
            }
            _ => Coordinates::random(rng.as_ref()),
        };

        debug!(
            source = rng.description(),
            stations = catalog.len(),
            %location,
            "Session started"
        );

        Ok(Self {
            catalog,
            rng,
            formatter,
            filters: config.search_filters()?,
            location,
        })
    }

    /// The user at this session's location
    pub fn user(&self, name: impl Into<String>) -> User {
        User::new(name, self.location)
    }
}

/// Name from the command line, else from config
///
/// Returns `None` when neither is set.
pub fn configured_name(options: &RunOptions, config: &Config) -> Option<String> {
    options
        .name
        .clone()
        .or_else(|| Some(config.user.name.clone()))
        .filter(|name| !name.trim().is_empty())
}

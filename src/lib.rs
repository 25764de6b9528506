//! ev-finder: EV charging station finder and slot booking simulator
//!
//! Generates a synthetic catalog of charging stations, searches it by
//! closeness, speed and availability, and books hourly slots against each
//! station's in-memory availability table. Nothing is persisted between runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use ev_finder::booking::User;
//! use ev_finder::catalog::generate_stations;
//! use ev_finder::coord::Coordinates;
//! use ev_finder::random::pseudo::SeededSource;
//! use ev_finder::search::{find_stations, SearchFilters};
//!
//! let rng = SeededSource::new(42);
//! let mut catalog = generate_stations(5, 9, &rng);
//! let user = User::new("Ada", Coordinates::new(10.0, 20.0));
//!
//! let hits = find_stations(&user, &catalog, &SearchFilters::default());
//! if let Some(name) = hits.first().map(|hit| hit.station.name.clone()) {
//!     let outcome = catalog.book(&user, &name, 2, &rng).unwrap();
//!     println!("{}", outcome.booking());
//! }
//! ```

pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod random;
pub mod search;
pub mod station;

// Re-export commonly used types
pub use booking::{book_slots, Booking, BookingOutcome, User};
pub use catalog::{generate_stations, Catalog};
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use search::{find_stations, SearchFilters, SearchHit};
pub use station::{Speed, Station};

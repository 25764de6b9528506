//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of stations in a generated catalog
pub const DEFAULT_STATIONS: usize = 5;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default lowest hourly price
pub const DEFAULT_MIN_PRICE: f64 = crate::catalog::DEFAULT_MIN_PRICE;

/// Default highest hourly price
pub const DEFAULT_MAX_PRICE: f64 = crate::catalog::DEFAULT_MAX_PRICE;

/// Default search ordering
pub const DEFAULT_SORT: &str = "catalog";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "ev-finder";

//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/ev-finder/config.toml

pub mod defaults;

use crate::catalog::GenerationSettings;
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::search::{SearchFilters, SortOrder};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default values for a run
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Catalog generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// User settings
    #[serde(default)]
    pub user: UserConfig,
}

/// Default values for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of stations to generate
    #[serde(default = "default_stations")]
    pub stations: usize,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Fixed seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Catalog generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Lowest hourly price
    #[serde(default = "default_min_price")]
    pub min_price: f64,

    /// Highest hourly price
    #[serde(default = "default_max_price")]
    pub max_price: f64,
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Hide stations with no free slot
    #[serde(default = "default_require_availability")]
    pub require_availability: bool,

    /// Result ordering: "catalog" or "distance"
    #[serde(default = "default_sort")]
    pub sort: String,
}

/// User settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Name used for bookings; empty means ask
    #[serde(default)]
    pub name: String,
}

// Default value functions for serde
fn default_stations() -> usize {
    DEFAULT_STATIONS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_min_price() -> f64 {
    DEFAULT_MIN_PRICE
}
fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}
fn default_require_availability() -> bool {
    true
}
fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            format: default_format(),
            seed: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            require_availability: default_require_availability(),
            sort: default_sort(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "stations"] => Some(self.defaults.stations.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "seed"] => Some(
                self.defaults
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),

            ["generation", "min_price"] => Some(self.generation.min_price.to_string()),
            ["generation", "max_price"] => Some(self.generation.max_price.to_string()),

            ["search", "require_availability"] => {
                Some(self.search.require_availability.to_string())
            }
            ["search", "sort"] => Some(self.search.sort.clone()),

            ["user", "name"] => Some(self.user.name.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "stations"] => {
                self.defaults.stations = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid station count: {}", value))
                })?;
            }
            ["defaults", "format"] => {
                if get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown format: {}", value)));
                }
                self.defaults.format = value.to_lowercase();
            }
            ["defaults", "seed"] => {
                self.defaults.seed = match value {
                    "" | "none" => None,
                    _ => Some(value.parse().map_err(|_| {
                        Error::Config(format!("Invalid seed value: {}", value))
                    })?),
                };
            }

            ["generation", "min_price"] => {
                let min_price = parse_price(value)?;
                self.generation_settings_with(min_price, self.generation.max_price)?;
                self.generation.min_price = min_price;
            }
            ["generation", "max_price"] => {
                let max_price = parse_price(value)?;
                self.generation_settings_with(self.generation.min_price, max_price)?;
                self.generation.max_price = max_price;
            }

            ["search", "require_availability"] => {
                self.search.require_availability = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }
            ["search", "sort"] => {
                let sort = SortOrder::from_str(value).map_err(Error::Config)?;
                self.search.sort = sort.to_string();
            }

            ["user", "name"] => {
                self.user.name = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.stations",
            "defaults.format",
            "defaults.seed",
            "generation.min_price",
            "generation.max_price",
            "search.require_availability",
            "search.sort",
            "user.name",
        ]
    }

    /// Price range for catalog generation
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            min_price: self.generation.min_price,
            max_price: self.generation.max_price,
        }
    }

    fn generation_settings_with(&self, min_price: f64, max_price: f64) -> Result<()> {
        GenerationSettings {
            min_price,
            max_price,
        }
        .validate()
        .map_err(|e| Error::Config(e.to_string()))
    }

    /// Search filters seeded from the `[search]` section
    pub fn search_filters(&self) -> Result<SearchFilters> {
        let sort = SortOrder::from_str(&self.search.sort).map_err(Error::Config)?;
        Ok(SearchFilters::default()
            .with_availability(self.search.require_availability)
            .sorted_by(sort))
    }
}

fn parse_price(value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid price value: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.defaults.stations, 5);
        assert_eq!(config.defaults.format, "text");
        assert_eq!(config.defaults.seed, None);
        assert_eq!(config.generation.min_price, 10.0);
        assert_eq!(config.generation.max_price, 30.0);
        assert!(config.search.require_availability);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.stations"), Some("5".to_string()));

        config.set("defaults.stations", "12").unwrap();
        assert_eq!(config.defaults.stations, 12);

        config.set("defaults.seed", "42").unwrap();
        assert_eq!(config.get("defaults.seed"), Some("42".to_string()));
        config.set("defaults.seed", "none").unwrap();
        assert_eq!(config.defaults.seed, None);

        config.set("search.sort", "Distance").unwrap();
        assert_eq!(config.get("search.sort"), Some("distance".to_string()));

        config.set("user.name", "Ada").unwrap();
        assert_eq!(config.get("user.name"), Some("Ada".to_string()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.stations", "-1").is_err());
        assert!(config.set("defaults.format", "yaml").is_err());
        assert!(config.set("defaults.seed", "abc").is_err());
        assert!(config.set("search.sort", "random").is_err());
        assert!(config.set("search.require_availability", "maybe").is_err());
    }

    #[test]
    fn test_set_price_range_checked() {
        let mut config = Config::default();
        assert!(config.set("generation.min_price", "50").is_err());
        assert_eq!(config.generation.min_price, 10.0);

        config.set("generation.max_price", "60").unwrap();
        config.set("generation.min_price", "50").unwrap();
        assert_eq!(config.generation_settings().min_price, 50.0);

        assert!(config.set("generation.min_price", "0").is_err());
    }

    #[test]
    fn test_search_filters_from_config() {
        let mut config = Config::default();
        config.set("search.sort", "distance").unwrap();
        config.set("search.require_availability", "false").unwrap();

        let filters = config.search_filters().unwrap();
        assert_eq!(filters.sort, SortOrder::Distance);
        assert!(!filters.require_availability);
        assert_eq!(filters.max_distance, None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.defaults.stations = 9;
        config.defaults.seed = Some(1234);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.stations, 9);
        assert_eq!(loaded.defaults.seed, Some(1234));
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let loaded = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(loaded.defaults.stations, 5);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults]\nstations = 3\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.stations, 3);
        assert_eq!(loaded.defaults.format, "text");
        assert_eq!(loaded.generation.max_price, 30.0);
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults\nstations = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[generation]"));
        assert!(toml.contains("[search]"));
        assert!(!toml.contains("seed"));
    }

    #[test]
    fn test_available_keys_resolve() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "{} has no getter", key);
        }
    }
}

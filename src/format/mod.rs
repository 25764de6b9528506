//! Output formatters
//!
//! Renders search results, catalog listings and booking outcomes.

pub mod json;
pub mod text;

use crate::booking::{BookingOutcome, User};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::search::SearchHit;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format search results for `user`
    fn format_hits(&self, user: &User, hits: &[SearchHit<'_>]) -> Result<String>;

    /// Format every station of the catalog
    fn format_catalog(&self, catalog: &Catalog) -> Result<String>;

    /// Format a booking outcome
    fn format_booking(&self, outcome: &BookingOutcome) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Pretty-printed JSON".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats_resolve() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        for format in formats {
            let formatter = get_formatter(&format.name).unwrap();
            assert_eq!(formatter.name(), format.name);
            assert_eq!(formatter.description(), format.description);
        }
    }
}

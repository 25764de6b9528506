//! JSON output formatter

use crate::booking::{BookingOutcome, User};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::search::SearchHit;
use crate::station::Station;

/// JSON formatter - pretty-printed JSON documents
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }

    fn format_hits(&self, user: &User, hits: &[SearchHit<'_>]) -> Result<String> {
        let document = serde_json::json!({
            "user": user,
            "count": hits.len(),
            "results": hits,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_catalog(&self, catalog: &Catalog) -> Result<String> {
        let stations: Vec<&Station> = catalog.iter().collect();
        Ok(serde_json::to_string_pretty(&stations)?)
    }

    fn format_booking(&self, outcome: &BookingOutcome) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcome)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::book_slots;
    use crate::catalog::generate_stations;
    use crate::coord::Coordinates;
    use crate::random::pseudo::SeededSource;
    use crate::search::{find_stations, SearchFilters};

    #[test]
    fn test_json_hits() {
        let rng = SeededSource::new(12345);
        let catalog = generate_stations(5, 9, &rng);
        let user = User::new("Ada", Coordinates::new(0.0, 0.0));
        let filters = SearchFilters::default().with_availability(false);
        let hits = find_stations(&user, &catalog, &filters);

        let output = JsonFormatter.format_hits(&user, &hits).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["count"], 5);
        assert_eq!(parsed["user"]["name"], "Ada");
        assert_eq!(parsed["results"][0]["station"]["name"], "Station A");
        assert!(parsed["results"][0]["distance"].is_number());
        assert_eq!(
            parsed["results"][0]["station"]["slots"]
                .as_array()
                .unwrap()
                .len(),
            24
        );
    }

    #[test]
    fn test_json_catalog() {
        let rng = SeededSource::new(1);
        let catalog = generate_stations(3, 0, &rng);

        let output = JsonFormatter.format_catalog(&catalog).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert!(parsed[0]["speed"] == "Fast" || parsed[0]["speed"] == "Slow");
    }

    #[test]
    fn test_json_booking() {
        let rng = SeededSource::new(1);
        let mut catalog = generate_stations(1, 0, &rng);
        let user = User::new("Ada", Coordinates::new(0.0, 0.0));
        let station = catalog.find_mut("Station A").unwrap();
        let outcome = book_slots(&user, station, 1, &rng).unwrap();

        let output = JsonFormatter.format_booking(&outcome).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("status").is_some());
        assert!(parsed["booking"]["id"].is_string());
        assert!(parsed["booking"]["confirmation_code"].is_string());
    }

    #[test]
    fn test_json_formatter_info() {
        assert_eq!(JsonFormatter.name(), "json");
        assert!(!JsonFormatter.description().is_empty());
    }
}

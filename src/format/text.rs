//! Human-readable text output formatter

use crate::booking::{BookingOutcome, User};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::search::SearchHit;

/// Text formatter - outputs human-readable lines
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_hits(&self, _user: &User, hits: &[SearchHit<'_>]) -> Result<String> {
        if hits.is_empty() {
            return Ok("No matching stations found.".to_string());
        }

        let mut output = String::from("Available Charging Stations:\n");
        for hit in hits {
            output.push_str(&format!(
                "- {} ({} charging) - {:.2} degrees away, ${:.2}/hour\n",
                hit.station.name, hit.station.speed, hit.distance, hit.station.price_per_hour
            ));
        }
        Ok(output.trim_end().to_string())
    }

    fn format_catalog(&self, catalog: &Catalog) -> Result<String> {
        if catalog.is_empty() {
            return Ok("No stations generated.".to_string());
        }

        let mut output = format!("Stations ({}):\n", catalog.len());
        for station in catalog.iter() {
            let slots = station.slots();
            output.push_str(&format!(
                "- {} ({} charging) at {}, ${:.2}/hour, {}/{} slots free\n",
                station.name,
                station.speed,
                station.location,
                station.price_per_hour,
                slots.available_count(),
                slots.len()
            ));
        }
        Ok(output.trim_end().to_string())
    }

    fn format_booking(&self, outcome: &BookingOutcome) -> Result<String> {
        let booking = outcome.booking();
        let mut output = String::new();

        if outcome.is_partial() {
            output.push_str(&format!(
                "Only {} slots available at {}.\n",
                booking.granted(),
                booking.station
            ));
        }
        output.push_str(&booking.confirmation());
        Ok(output)
    }
}

//! Search command handler
//!
//! Filters a freshly generated catalog once and prints the matches.

use crate::cli::session::{configured_name, Session};
use crate::cli::RunOptions;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::search::{find_stations, parse_max_distance, parse_speed_filter, SearchFilters, SortOrder};
use clap::Args;
use std::str::FromStr;

/// Search command arguments
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Keep stations at most this far away (closeness score)
    #[arg(long, short = 'd', allow_hyphen_values = true)]
    pub max_distance: Option<String>,

    /// Charging speed (Fast or Slow)
    #[arg(long, short = 's')]
    pub speed: Option<String>,

    /// Include stations with no free slot
    #[arg(long)]
    pub all: bool,

    /// Result order: catalog or distance
    #[arg(long)]
    pub sort: Option<String>,
}

impl SearchArgs {
    /// Layer these arguments over the configured base filters
    pub fn filters(&self, base: SearchFilters) -> Result<SearchFilters> {
        let mut filters = base;
        if let Some(input) = &self.max_distance {
            filters.max_distance = parse_max_distance(input)?;
        }
        if let Some(input) = &self.speed {
            filters.speed = parse_speed_filter(input)?;
        }
        if self.all {
            filters.require_availability = false;
        }
        if let Some(sort) = &self.sort {
            filters.sort = SortOrder::from_str(sort).map_err(Error::Validation)?;
        }
        Ok(filters)
    }
}

/// Run the search command
pub fn run(args: SearchArgs, options: &RunOptions, config: &Config) -> Result<()> {
    let session = Session::start(options, config)?;
    let filters = args.filters(session.filters)?;
    let user = session.user(configured_name(options, config).unwrap_or_else(|| "guest".to_string()));

    let hits = find_stations(&user, &session.catalog, &filters);
    println!("{}", session.formatter.format_hits(&user, &hits)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::Speed;

    #[test]
    fn test_filters_layered_over_base() {
        let args = SearchArgs {
            max_distance: Some("12.5".to_string()),
            speed: Some("slow".to_string()),
            all: true,
            sort: Some("distance".to_string()),
        };
        let filters = args.filters(SearchFilters::default()).unwrap();

        assert_eq!(filters.max_distance, Some(12.5));
        assert_eq!(filters.speed, Some(Speed::Slow));
        assert!(!filters.require_availability);
        assert_eq!(filters.sort, SortOrder::Distance);
    }

    #[test]
    fn test_filters_keep_base_when_unset() {
        let base = SearchFilters::default().sorted_by(SortOrder::Distance);
        let filters = SearchArgs::default().filters(base).unwrap();
        assert_eq!(filters, base);
    }

    #[test]
    fn test_filters_reject_bad_input() {
        let negative = SearchArgs {
            max_distance: Some("-3".to_string()),
            ..SearchArgs::default()
        };
        assert!(negative.filters(SearchFilters::default()).is_err());

        let speed = SearchArgs {
            speed: Some("ludicrous".to_string()),
            ..SearchArgs::default()
        };
        assert!(speed.filters(SearchFilters::default()).is_err());
    }
}

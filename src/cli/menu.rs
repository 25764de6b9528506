//! Interactive menu
//!
//! The find / book / exit loop. Reads answers line by line from any
//! `BufRead` and writes to any `Write`, so tests can drive it with buffers.
//! Bad answers are reported and the loop carries on; end of input exits.

use crate::booking::{parse_slot_count, User};
use crate::cli::session::{configured_name, Session};
use crate::cli::RunOptions;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::search::{find_stations, parse_max_distance, parse_speed_filter, SearchFilters};
use std::io::{BufRead, Write};

/// Run the menu command on stdin/stdout
pub fn run(options: &RunOptions, config: &Config) -> Result<()> {
    let session = Session::start(options, config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut menu = Menu::new(session, stdin.lock(), stdout.lock());
    menu.run(configured_name(options, config))
}

/// Menu loop over a session
pub struct Menu<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Hand back the session, e.g. to inspect the catalog afterwards
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run until the user exits or input ends
    ///
    /// Asks for a name first when `name` is `None`.
    pub fn run(&mut self, name: Option<String>) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to the EV Charging Station Finder and Slot Booking System"
        )?;

        let name = match name {
            Some(name) => name,
            None => self.prompt("Enter your name: ")?.unwrap_or_default(),
        };
        let user = self.session.user(name.trim());

        loop {
            writeln!(
                self.output,
                "\n1. Find Charging Stations\n2. Book a Charging Slot\n3. Exit"
            )?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.find(&user)?,
                "2" => self.book(&user)?,
                "3" => {
                    writeln!(self.output, "Exiting the system. Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice, please try again.")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn find(&mut self, user: &User) -> Result<()> {
        let Some(distance) =
            self.prompt("Enter max distance (in degrees, e.g., 10.0) (or leave blank to skip): ")?
        else {
            return Ok(());
        };
        let Some(speed) =
            self.prompt("Enter the charging speed (Fast/Slow) (or leave blank to skip): ")?
        else {
            return Ok(());
        };

        let filters = match self.filters_from(&distance, &speed) {
            Ok(filters) => filters,
            Err(e) => return self.report(&e),
        };

        let hits = find_stations(user, &self.session.catalog, &filters);
        let text = self.session.formatter.format_hits(user, &hits)?;
        writeln!(self.output, "\n{}", text)?;
        Ok(())
    }

    fn filters_from(&self, distance: &str, speed: &str) -> Result<SearchFilters> {
        let mut filters = self.session.filters;
        filters.max_distance = parse_max_distance(distance)?;
        filters.speed = parse_speed_filter(speed)?;
        Ok(filters)
    }

    fn book(&mut self, user: &User) -> Result<()> {
        let Some(station) = self.prompt("Enter the station name: ")? else {
            return Ok(());
        };
        let Some(count) = self.prompt("Enter the number of slots you want to book: ")? else {
            return Ok(());
        };

        let count = match parse_slot_count(&count) {
            Ok(count) => count,
            Err(e) => return self.report(&e),
        };

        let session = &mut self.session;
        match session
            .catalog
            .book(user, station.trim(), count, session.rng.as_ref())
        {
            Ok(outcome) => {
                let text = session.formatter.format_booking(&outcome)?;
                writeln!(self.output, "\n{}", text)?;
                Ok(())
            }
            Err(e @ (Error::NotFound(_) | Error::Validation(_))) => self.report(&e),
            Err(e) => Err(e),
        }
    }

    fn report(&mut self, error: &Error) -> Result<()> {
        writeln!(self.output, "\n{}", error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::coord::Coordinates;
    use crate::format::text::TextFormatter;
    use crate::random::pseudo::SeededSource;
    use crate::station::{SlotTable, Speed, Station};
    use std::io::Cursor;

    fn session() -> Session {
        let catalog = Catalog::from_stations(vec![
            Station::new(
                "Station A",
                Coordinates::new(3.0, 4.0),
                Speed::Fast,
                10.0,
                SlotTable::all_available(0),
            )
            .unwrap(),
            Station::new(
                "Station B",
                Coordinates::new(30.0, 40.0),
                Speed::Slow,
                15.0,
                SlotTable::from_fn(0, |o| o < 2),
            )
            .unwrap(),
        ])
        .unwrap();

        Session {
            catalog,
            rng: Box::new(SeededSource::new(42)),
            formatter: Box::new(TextFormatter),
            filters: SearchFilters::default(),
            location: Coordinates::new(0.0, 0.0),
        }
    }

    fn drive(script: &str, name: Option<&str>) -> (String, Session) {
        let mut output = Vec::new();
        let mut menu = Menu::new(session(), Cursor::new(script.to_string()), &mut output);
        menu.run(name.map(str::to_string)).unwrap();
        let session = menu.into_session();
        (String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn test_exit() {
        let (output, _) = drive("3\n", Some("Ada"));
        assert!(output.contains("Welcome"));
        assert!(output.contains("Exiting the system. Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (output, _) = drive("", None);
        assert!(output.contains("Enter your name: "));
        assert!(!output.contains("Goodbye"));
    }

    #[test]
    fn test_prompts_for_name() {
        let (output, session) = drive("Ada\n2\nStation A\n1\n3\n", None);
        assert!(output.contains("Booking confirmed for Ada at Station A"));
        assert_eq!(session.catalog.find("Station A").unwrap().slots().available_count(), 23);
    }

    #[test]
    fn test_find_with_filters() {
        let (output, _) = drive("1\n10\nfast\n3\n", Some("Ada"));
        assert!(output.contains("- Station A (Fast charging) - 5.00 degrees away, $10.00/hour"));
        assert!(!output.contains("- Station B"));
    }

    #[test]
    fn test_find_blank_filters_lists_all() {
        let (output, _) = drive("1\n\n\n3\n", Some("Ada"));
        assert!(output.contains("- Station A"));
        assert!(output.contains("- Station B"));
    }

    #[test]
    fn test_find_zero_distance_matches_nothing() {
        let (output, _) = drive("1\n0\n\n3\n", Some("Ada"));
        assert!(output.contains("No matching stations found."));
    }

    #[test]
    fn test_find_bad_distance_reported() {
        let (output, _) = drive("1\nfar\n\n3\n", Some("Ada"));
        assert!(output.contains("Invalid input: Invalid distance: far"));
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn test_partial_booking_then_search_hides_station() {
        let (output, session) = drive("2\nStation B\n5\n1\n\nslow\n3\n", Some("Ada"));

        assert!(output.contains("Only 2 slots available at Station B."));
        assert!(output.contains("Total Price: $30.00"));
        assert!(output.contains("No matching stations found."));
        assert!(!session.catalog.find("Station B").unwrap().slots().any_available());
    }

    #[test]
    fn test_unknown_station_reported() {
        let (output, session) = drive("2\nStation Z\n2\n3\n", Some("Ada"));

        assert!(output.contains("No station found with the name Station Z"));
        assert!(session.catalog.iter().all(|s| s.slots().available_count()
            == if s.name == "Station A" { 24 } else { 2 }));
    }

    #[test]
    fn test_bad_slot_count_reported() {
        let (output, session) = drive("2\nStation A\n-1\n2\nStation A\nmany\n3\n", Some("Ada"));

        assert!(output.contains("Number of slots must be at least 1, got -1"));
        assert!(output.contains("Not a whole number: many"));
        assert_eq!(session.catalog.find("Station A").unwrap().slots().available_count(), 24);
    }

    #[test]
    fn test_invalid_choice() {
        let (output, _) = drive("7\n3\n", Some("Ada"));
        assert!(output.contains("Invalid choice, please try again."));
    }
}

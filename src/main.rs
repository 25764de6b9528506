//! ev-finder CLI entry point
//!
//! EV charging station finder and slot booking simulator

use ev_finder::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

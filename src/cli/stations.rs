//! Stations command handler
//!
//! Prints the generated catalog.

use crate::cli::session::Session;
use crate::cli::RunOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the stations command
pub fn run(options: &RunOptions, config: &Config) -> Result<()> {
    let session = Session::start(options, config)?;
    println!("{}", session.formatter.format_catalog(&session.catalog)?);
    Ok(())
}

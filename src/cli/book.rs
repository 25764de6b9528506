//! Book command handler
//!
//! Books slots once against a freshly generated catalog. Pair with `--seed`
//! to book against the same catalog `stations` printed.

use crate::booking::parse_slot_count;
use crate::cli::session::{configured_name, Session};
use crate::cli::RunOptions;
use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Book command arguments
#[derive(Args, Debug)]
pub struct BookArgs {
    /// Station name, e.g. "Station A"
    pub station: String,

    /// Number of hourly slots to book
    #[arg(long, short = 's', default_value = "1", allow_hyphen_values = true)]
    pub slots: String,
}

/// Run the book command
pub fn run(args: BookArgs, options: &RunOptions, config: &Config) -> Result<()> {
    let name = configured_name(options, config).ok_or_else(|| {
        Error::Validation("A user name is required: pass --name or set user.name".to_string())
    })?;
    let count = parse_slot_count(&args.slots)?;

    let mut session = Session::start(options, config)?;
    let user = session.user(name);
    let outcome = session
        .catalog
        .book(&user, &args.station, count, session.rng.as_ref())?;

    println!("{}", session.formatter.format_booking(&outcome)?);
    Ok(())
}

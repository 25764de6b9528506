//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod book;
pub mod config;
pub mod menu;
pub mod search;
pub mod session;
pub mod stations;

use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// EV charging station finder and slot booking simulator
#[derive(Parser)]
#[command(name = "ev-finder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: RunOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that generates a catalog
#[derive(Args, Debug, Clone, Default)]
pub struct RunOptions {
    /// Seed for a reproducible catalog
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of stations to generate
    #[arg(long, short = 'n', global = true)]
    pub stations: Option<usize>,

    /// Output format (text or json)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<String>,

    /// User name for bookings
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// User latitude (random if omitted)
    #[arg(long, global = true, allow_hyphen_values = true, requires = "lng")]
    pub lat: Option<f64>,

    /// User longitude (random if omitted)
    #[arg(long, global = true, allow_hyphen_values = true, requires = "lat")]
    pub lng: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive find/book menu
    Menu,

    /// List the generated stations
    Stations,

    /// Search stations once
    Search(search::SearchArgs),

    /// Book slots once
    Book(book::BookArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Menu => menu::run(&cli.options, &load_config()),
        Commands::Stations => stations::run(&cli.options, &load_config()),
        Commands::Search(args) => search::run(args, &cli.options, &load_config()),
        Commands::Book(args) => book::run(args, &cli.options, &load_config()),
        Commands::Config(args) => config::run(args),
    }
}

/// Log to stderr, `warn` unless RUST_LOG says otherwise
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// A broken config file should not stop a run
fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!("{}; using default configuration", e);
        Config::default()
    })
}

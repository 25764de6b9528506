//! Error types for ev-finder

use thiserror::Error;

/// Main error type for ev-finder operations
///
/// Partial bookings are not errors; see [`crate::booking::BookingOutcome`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No station found with the name {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ev-finder operations
pub type Result<T> = std::result::Result<T, Error>;

//! Centralized constants for the ev-finder crate

/// Coordinate ranges used when placing stations and users
pub mod geo {
    /// Latitude-shaped bound, stations are drawn from [-MAX_LAT, MAX_LAT]
    pub const MAX_LAT: f64 = 90.0;

    /// Longitude-shaped bound, stations are drawn from [-MAX_LNG, MAX_LNG]
    pub const MAX_LNG: f64 = 180.0;
}

/// Availability table shape
pub mod slots {
    /// Number of hourly slots every station carries
    pub const SLOTS_PER_STATION: usize = 24;

    /// Hours in a day, slot labels wrap modulo this
    pub const HOURS_PER_DAY: u8 = 24;
}

/// Confirmation code shape
pub mod code {
    /// Number of name characters at the start of a code
    pub const PREFIX_LEN: usize = 2;

    /// Filler used when the user name is shorter than the prefix
    pub const PREFIX_FILLER: char = 'X';

    /// Smallest numeric suffix
    pub const SUFFIX_MIN: u32 = 1000;

    /// Largest numeric suffix (inclusive)
    pub const SUFFIX_MAX: u32 = 9999;
}

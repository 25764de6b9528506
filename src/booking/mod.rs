//! Slot booking
//!
//! Booking takes the earliest free slots of one station, marks them taken and
//! returns a receipt. Asking for more slots than are free is not an error: the
//! outcome is `Partial` and carries both the requested and granted counts.

pub mod code;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::station::Station;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use code::{code_prefix, confirmation_code};

/// The person searching and booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub location: Coordinates,
}

impl User {
    pub fn new(name: impl Into<String>, location: Coordinates) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// User placed at a random location
    pub fn at_random(name: impl Into<String>, rng: &dyn RandomSource) -> Self {
        Self::new(name, Coordinates::random(rng))
    }
}

/// Receipt for one booking
///
/// Holds copies of the user and station names so it can outlive any borrow
/// of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique ID for this booking
    pub id: String,
    pub user: String,
    pub station: String,
    /// Labels of the slots actually granted, in booking order
    pub slots: Vec<String>,
    pub price_per_hour: f64,
    /// Always `slots.len() * price_per_hour`
    pub total_price: f64,
    pub confirmation_code: String,
    /// RFC 3339 timestamp
    pub booked_at: String,
}

impl Booking {
    /// Number of slots granted
    pub fn granted(&self) -> usize {
        self.slots.len()
    }

    /// Human-readable confirmation
    pub fn confirmation(&self) -> String {
        let window = if self.slots.is_empty() {
            "no slots".to_string()
        } else {
            self.slots.join(", ")
        };
        format!(
            "Booking confirmed for {} at {} for {}.\nTotal Price: ${:.2}\nConfirmation Code: {}",
            self.user, self.station, window, self.total_price, self.confirmation_code
        )
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.confirmation())
    }
}

/// Result of a booking request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// Every requested slot was granted
    Fulfilled { booking: Booking },
    /// Fewer slots were free than requested; `booking.slots` holds what was
    /// granted (possibly none)
    Partial { booking: Booking, requested: u32 },
}

impl BookingOutcome {
    pub fn booking(&self) -> &Booking {
        match self {
            Self::Fulfilled { booking } | Self::Partial { booking, .. } => booking,
        }
    }

    pub fn into_booking(self) -> Booking {
        match self {
            Self::Fulfilled { booking } | Self::Partial { booking, .. } => booking,
        }
    }

    /// Number of slots asked for
    pub fn requested(&self) -> u32 {
        match self {
            Self::Fulfilled { booking } => booking.granted() as u32,
            Self::Partial { requested, .. } => *requested,
        }
    }

    /// Number of slots granted
    pub fn granted(&self) -> usize {
        self.booking().granted()
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }
}

/// Book `count` slots at `station` for `user`
///
/// Takes the earliest free slots in stored order and flips them to taken.
/// A zero count is rejected. The exclusive borrow of `station` covers the
/// whole scan-and-flip, so a slot can never be granted twice.
pub fn book_slots(
    user: &User,
    station: &mut Station,
    count: u32,
    rng: &dyn RandomSource,
) -> Result<BookingOutcome> {
    if count == 0 {
        return Err(Error::Validation(
            "Number of slots must be at least 1".to_string(),
        ));
    }

    let granted = station.slots_mut().claim_earliest(count as usize);
    let total_price = granted.len() as f64 * station.price_per_hour;

    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        user: user.name.clone(),
        station: station.name.clone(),
        slots: granted,
        price_per_hour: station.price_per_hour,
        total_price,
        confirmation_code: confirmation_code(&user.name, rng),
        booked_at: chrono::Utc::now().to_rfc3339(),
    };

    let partial = booking.granted() < count as usize;
    info!(
        station = %booking.station,
        user = %booking.user,
        requested = count,
        granted = booking.granted(),
        total_price,
        partial,
        "Booked slots"
    );

    if partial {
        Ok(BookingOutcome::Partial {
            booking,
            requested: count,
        })
    } else {
        Ok(BookingOutcome::Fulfilled { booking })
    }
}

/// Parse a user-entered slot count
///
/// Zero, negative and non-numeric input are validation errors.
pub fn parse_slot_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::Validation(format!("Not a whole number: {}", trimmed)))?;

    if value <= 0 {
        return Err(Error::Validation(format!(
            "Number of slots must be at least 1, got {}",
            value
        )));
    }

    u32::try_from(value)
        .map_err(|_| Error::Validation(format!("Number of slots is too large: {}", value)))
}

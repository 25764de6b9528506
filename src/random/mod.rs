//! Random sources
//!
//! Everything random in a run (station placement, speeds, prices, slot
//! availability, confirmation codes) is drawn from a `RandomSource` handed in
//! by the caller. Tests pass a seeded source to get reproducible catalogs.

pub mod pseudo;

/// Trait for random number sources
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "pseudo", "seeded")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Generate a single float uniformly distributed in [0.0, 1.0)
    fn float(&self) -> f64;

    /// Generate a float uniformly distributed in [low, high)
    fn uniform(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.float()
    }

    /// Fair coin flip
    fn coin(&self) -> bool {
        self.float() < 0.5
    }

    /// Generate an integer uniformly distributed in [low, high]
    ///
    /// Returns `low` when the range is empty or inverted.
    fn int_inclusive(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = u64::from(high - low) + 1;
        let offset = ((self.float() * span as f64) as u64).min(span - 1);
        low + offset as u32
    }
}

/// Pick a source for a run
///
/// A seed gives a reproducible run, no seed draws from the thread RNG.
pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededSource::new(seed)),
        None => Box::new(pseudo::PseudoSource::new()),
    }
}

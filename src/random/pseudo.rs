//! Pseudo-random sources backed by the `rand` crate

use crate::random::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Thread RNG source, different on every run
pub struct PseudoSource {
    _phantom: std::marker::PhantomData<()>,
}

impl PseudoSource {
    /// Create a new pseudo-random source
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Default for PseudoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for PseudoSource {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    fn description(&self) -> &'static str {
        "Thread-local pseudo-random generator"
    }

    fn float(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded source for deterministic runs and tests
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn description(&self) -> &'static str {
        "Seeded pseudo-random generator (reproducible)"
    }

    fn float(&self) -> f64 {
        // A poisoned lock still holds a usable RNG state
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}

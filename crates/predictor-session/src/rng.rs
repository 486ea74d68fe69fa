use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)` for synthetic model input.
///
/// Injected into the session so tests and reproducible runs can substitute a
/// deterministic source.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f32;
}

/// OS-entropy seeded source; successive sessions yield different values.
pub struct EntropySource(StdRng);

impl EntropySource {
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f32 {
        self.0.random()
    }
}

/// Deterministically seeded source for reproducible runs.
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f32 {
        self.0.random()
    }
}

//! Fresh blob seeds for the "shuffle" action.
//!
//! Generation itself never touches a random source: noise is a pure function
//! of `(angle, seed)`. Only callers draw new seeds, through a seedable
//! [`Xorshift64`] so that a shuffle sequence can be replayed too.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of a shuffled blob seed.
pub const SEED_RANGE: f64 = 1000.0;

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses shifts (13, 7, 17). A seed of 0 is replaced with a non-zero fallback
/// to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1), from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Draws a fresh blob seed in `[0, SEED_RANGE)`.
pub fn shuffle_seed(rng: &mut Xorshift64) -> f64 {
    rng.next_range(0.0, SEED_RANGE)
}

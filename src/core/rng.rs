//! Deterministic random number generation for draws and orientation.
//!
//! Every source of randomness in the engine (card shuffling, the 50/50
//! reversed-orientation roll) goes through `DrawRng` so tests can seed it
//! and assert exact outcomes.
//!
//! ```
//! use tarot_table::core::DrawRng;
//!
//! let mut a = DrawRng::new(42);
//! let mut b = DrawRng::new(42);
//! assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG behind all shuffle and orientation decisions.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
/// Same seed produces an identical sequence.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// Used at server startup when no explicit seed is configured.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

//! Deterministic random number generation for tile spawns.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawn sequence
//! - **Seed recovery**: The seed is kept so a game can be reported and replayed
//!
//! ```
//! use cmd_2048::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..16), b.gen_range_usize(0..16));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the engine for spawning tiles.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a seed drawn from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities outside `[0, 1]` are clamped; NaN counts as 0.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.gen_range_usize(0..slice.len());
        slice.get(idx)
    }
}

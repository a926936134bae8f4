//! Deterministic random number generation for reproducible play.
//!
//! Policies never reach for ambient randomness; the caller seeds an
//! [`AiRng`] and threads it through, so a game replayed with the same
//! seed and the same move feed is identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG handed to move policies.
///
/// Uses ChaCha8 for speed with high-quality randomness.
#[derive(Clone, Debug)]
pub struct AiRng {
    inner: ChaCha8Rng,
}

impl AiRng {
    /// Create an RNG from a seed. The same seed always produces the
    /// same sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`. Panics if `len` is zero.
    #[must_use]
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        self.inner.gen_range(0..len)
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.pick_index(items.len())])
        }
    }
}

//! Deterministic random point generation for simulated matches.
//!
//! The scoring engines never draw random numbers. `ScoreRng` exists for the
//! simulator, which needs reproducible rally outcomes:
//!
//! ```
//! use racket_score::core::{ScoreRng, Side};
//!
//! let mut a = ScoreRng::new(7);
//! let mut b = ScoreRng::new(7);
//!
//! // Same seed, same rallies.
//! for _ in 0..20 {
//!     assert_eq!(a.rally_winner(Side::One, 0.6), b.rally_winner(Side::One, 0.6));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::side::Side;

/// Seeded ChaCha8 generator with forking.
#[derive(Clone, Debug)]
pub struct ScoreRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ScoreRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream (one per simulated match).
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// True with the given probability. Probabilities outside 0..=1 are
    /// clamped; NaN counts as an even chance.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let probability = if probability.is_nan() { 0.5 } else { probability.clamp(0.0, 1.0) };
        self.inner.gen_bool(probability)
    }

    /// Decide who wins a rally when `server` wins with probability `serve_win`.
    pub fn rally_winner(&mut self, server: Side, serve_win: f64) -> Side {
        if self.gen_bool(serve_win) {
            server
        } else {
            server.opponent()
        }
    }
}

//! Randomness for rooks and the coordinator.
//!
//! Everything random in the simulation goes through the [`RandomInt`]
//! capability, so the control loop can be driven by a scripted source in
//! tests and by a `SmallRng` in real runs.
//!
//! # Seeding
//!
//! With a global seed each rook gets its own independent `SmallRng` seeded
//! by:
//!
//!   seed = global_seed XOR (rook_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive rook ids across the seed space.  A seed fixes
//! every draw a rook makes, but not the thread interleaving, so whole runs
//! are still not reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::RookId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomInt ─────────────────────────────────────────────────────────────────

/// Source of uniformly distributed integers.
pub trait RandomInt {
    /// A value in `min..=max`.  Returns `min` when `max < min`.
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RandomInt + ?Sized> RandomInt for &mut R {
    #[inline]
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).random_int(min, max)
    }
}

#[inline]
fn draw(rng: &mut SmallRng, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

// ── RookRng ───────────────────────────────────────────────────────────────────

/// Per-rook RNG, owned by the rook's thread.
pub struct RookRng(SmallRng);

impl RookRng {
    /// Seed deterministically from the run's global seed and a rook id.
    pub fn new(global_seed: u64, rook: RookId) -> Self {
        let seed = global_seed ^ (rook.0 as u64).wrapping_mul(MIXING_CONSTANT);
        RookRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        RookRng(SmallRng::from_entropy())
    }

    /// `Some(seed)` behaves like [`new`](Self::new), `None` like
    /// [`from_entropy`](Self::from_entropy).
    pub fn for_rook(global_seed: Option<u64>, rook: RookId) -> Self {
        match global_seed {
            Some(seed) => Self::new(seed, rook),
            None       => Self::from_entropy(),
        }
    }
}

impl RandomInt for RookRng {
    #[inline]
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        draw(&mut self.0, min, max)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Coordinator RNG: rook count and initial placement.  Used only before the
/// rook threads start.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None       => Self::from_entropy(),
        }
    }

    /// Uniform `usize` in `min..=max`.
    #[inline]
    pub fn gen_count(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}

impl RandomInt for SimRng {
    #[inline]
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        draw(&mut self.0, min, max)
    }
}

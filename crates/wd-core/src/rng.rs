//! Deterministic RNG wrapper for behavior decisions.
//!
//! The controller draws one spin duration per recovery cycle.  Seeding from
//! the run seed makes every run with the same seed and the same hazard
//! script produce an identical command stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a single controller.
///
/// Used only on the dispatch thread; give each controller its own instance.
pub struct BehaviorRng(SmallRng);

impl BehaviorRng {
    pub fn new(seed: u64) -> Self {
        BehaviorRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

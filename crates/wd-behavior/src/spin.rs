//! Spin duration drawn once per recovery cycle.

use std::fmt;

use wd_core::BehaviorRng;

/// Length of one in-place spin, in whole seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinDuration(pub u64);

impl SpinDuration {
    /// Draw a duration for the bound `(min_secs, max_secs)`.
    ///
    /// Reproduces the deployed helper `rand() % (max - min) + min + 1`: the
    /// result lies in `[min + 1, max]`, so the declared minimum itself is
    /// never drawn.  With the default bound `(1, 5)` that is 2..=5 seconds.
    /// Callers must ensure `max_secs > min_secs`;
    /// [`WanderConfig::validate`][crate::WanderConfig::validate] rejects
    /// anything else.
    pub fn draw(rng: &mut BehaviorRng, min_secs: u64, max_secs: u64) -> Self {
        debug_assert!(max_secs > min_secs, "empty spin bound ({min_secs}, {max_secs})");
        SpinDuration(rng.gen_range(0..max_secs - min_secs) + min_secs + 1)
    }

    #[inline]
    pub fn secs(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0.saturating_mul(1_000)
    }
}

impl fmt::Display for SpinDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

//! Run time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  `RunClock` maps ticks
//! to elapsed milliseconds:
//!
//!   elapsed_ms = tick * tick_duration_ms
//!
//! Timer periods are given in milliseconds and converted to whole ticks once,
//! when a timer is armed, so all scheduling arithmetic is exact integer math.
//! The default resolution is 10 ms, which represents every period the
//! wanderer uses (500 ms, 1.5 s, 3 s, whole seconds) without rounding.

use std::fmt;

use crate::{WdError, WdResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute run tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and elapsed milliseconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunClock {
    /// How many milliseconds one tick represents.  Default: 10.
    pub tick_duration_ms: u32,
    /// The current tick — advanced by `RunClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl RunClock {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self {
            tick_duration_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.ms_at(self.current_tick)
    }

    /// Milliseconds since tick 0 at an arbitrary tick.
    #[inline]
    pub fn ms_at(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_ms as u64
    }

    /// Elapsed time as fractional seconds, for log lines.
    #[inline]
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed_ms() as f64 / 1_000.0
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// How many ticks span `ms` milliseconds? (rounds up — a timer never
    /// fires early)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_duration_ms as u64)
    }
}

impl Default for RunClock {
    fn default() -> Self {
        Self::new(10)
    }
}

impl fmt::Display for RunClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs_f64())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration for the host runtime.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Milliseconds per tick.  Every timer period must be a multiple of this
    /// for the schedule to stay exact.  Default: 10.
    pub tick_duration_ms: u32,

    /// Total ticks to run.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always draws the same spin durations.
    pub seed: u64,

    /// Emit an empty hazard batch every N ms.  `None` delivers only the
    /// scripted batches.
    pub hazard_heartbeat_ms: Option<u64>,
}

impl RunConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `RunClock` pre-configured for this run.
    pub fn make_clock(&self) -> RunClock {
        RunClock::new(self.tick_duration_ms)
    }

    /// Run length expressed in milliseconds.
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.total_ticks = ms.div_ceil(self.tick_duration_ms.max(1) as u64);
        self
    }

    pub fn validate(&self) -> WdResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(WdError::Config("tick_duration_ms must be positive".into()));
        }
        if self.hazard_heartbeat_ms == Some(0) {
            return Err(WdError::Config("hazard_heartbeat_ms must be positive".into()));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms:    10,
            total_ticks:         3_000, // 30 s at 10 ms
            seed:                0,
            hazard_heartbeat_ms: Some(100),
        }
    }
}

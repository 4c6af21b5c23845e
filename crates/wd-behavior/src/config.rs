//! Tuning parameters for the bump-and-spin behavior.
//!
//! Defaults are the values the robot was deployed with.  Changing them
//! changes the command stream, so tests that check exact velocities or
//! timing use `WanderConfig::default()`.

use crate::{BehaviorError, BehaviorResult};

/// Longest delay any timer may be armed with: one hour.
pub const MAX_DELAY_MS: u64 = 3_600_000;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Forward linear velocity (m/s).  Default: 0.1.
    pub forward_speed: f64,

    /// Reverse linear velocity (m/s).  Default: -0.0001.
    pub reverse_speed: f64,

    /// In-place angular velocity (rad/s).  Default: 0.5.
    pub spin_rate: f64,

    /// ForwardDrive tick period.  Default: 500 ms.
    pub forward_period_ms: u64,

    /// ForwardStop delay.  Registered only; the stop happens inline.
    /// Default: 3 000 ms.
    pub forward_stop_ms: u64,

    /// Reverse tick period; also the delay before the first reverse command.
    /// Default: 1 500 ms.
    pub reverse_period_ms: u64,

    /// Length of the reverse phase.  Default: 3 000 ms.
    pub reverse_stop_ms: u64,

    /// Spin tick period.  Default: 500 ms.
    pub spin_period_ms: u64,

    /// Lower end of the spin bound in seconds (exclusive in practice, see
    /// [`SpinDuration::draw`][crate::SpinDuration::draw]).  Default: 1.
    pub spin_min_secs: u64,

    /// Upper end of the spin bound in seconds.  Default: 5.
    pub spin_max_secs: u64,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            forward_speed:     0.1,
            reverse_speed:     -0.0001,
            spin_rate:         0.5,
            forward_period_ms: 500,
            forward_stop_ms:   3_000,
            reverse_period_ms: 1_500,
            reverse_stop_ms:   3_000,
            spin_period_ms:    500,
            spin_min_secs:     1,
            spin_max_secs:     5,
        }
    }
}

impl WanderConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        for (name, v) in [
            ("forward_speed", self.forward_speed),
            ("reverse_speed", self.reverse_speed),
            ("spin_rate", self.spin_rate),
        ] {
            if !v.is_finite() {
                return Err(BehaviorError::Config(format!("{name} must be finite, got {v}")));
            }
        }

        for (name, v) in [
            ("forward_period_ms", self.forward_period_ms),
            ("forward_stop_ms", self.forward_stop_ms),
            ("reverse_period_ms", self.reverse_period_ms),
            ("reverse_stop_ms", self.reverse_stop_ms),
            ("spin_period_ms", self.spin_period_ms),
        ] {
            if v == 0 {
                return Err(BehaviorError::Config(format!("{name} must be positive")));
            }
            if v > MAX_DELAY_MS {
                return Err(BehaviorError::Config(format!(
                    "{name} = {v} exceeds the {MAX_DELAY_MS} ms limit"
                )));
            }
        }

        if self.spin_max_secs <= self.spin_min_secs {
            return Err(BehaviorError::Config(format!(
                "spin bound ({}, {}) is empty: spin_max_secs must exceed spin_min_secs",
                self.spin_min_secs, self.spin_max_secs
            )));
        }
        if self.spin_max_secs > MAX_DELAY_MS / 1_000 {
            return Err(BehaviorError::Config(format!(
                "spin_max_secs = {} exceeds the {} s limit",
                self.spin_max_secs,
                MAX_DELAY_MS / 1_000
            )));
        }
        Ok(())
    }
}

//! Timer identifiers.

use std::fmt;

/// One of the six named timers the wanderer owns.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerId {
    /// Periodic forward-velocity tick.
    ForwardDrive,
    /// Registered for parity with the drive timers; halting forward motion
    /// happens inline, so it is never armed by the controller.
    ForwardStop,
    /// Periodic reverse-velocity tick.
    Reverse,
    /// Ends the reverse phase.
    ReverseStop,
    /// Periodic in-place rotation tick.
    Spin,
    /// Ends the spin phase after the drawn duration.
    SpinStop,
}

impl TimerId {
    pub const COUNT: usize = 6;

    pub const ALL: [TimerId; Self::COUNT] = [
        TimerId::ForwardDrive,
        TimerId::ForwardStop,
        TimerId::Reverse,
        TimerId::ReverseStop,
        TimerId::Spin,
        TimerId::SpinStop,
    ];

    /// Slot index into per-timer arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerId::ForwardDrive => "forward_drive",
            TimerId::ForwardStop  => "forward_stop",
            TimerId::Reverse      => "reverse",
            TimerId::ReverseStop  => "reverse_stop",
            TimerId::Spin         => "spin",
            TimerId::SpinStop     => "spin_stop",
        }
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a timer re-arms itself after firing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerMode {
    Periodic,
    OneShot,
}

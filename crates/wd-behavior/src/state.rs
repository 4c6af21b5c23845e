//! Behavior states.

use std::fmt;

use crate::SpinDuration;

/// The recovery primitive currently running inside `DuringProcess`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryPhase {
    /// Backing away from the obstacle until ReverseStop fires.
    Reversing,
    /// Rotating in place until SpinStop fires after `duration`.
    Spinning { duration: SpinDuration },
}

/// The wanderer's state.  Exactly one is active at a time; there is no
/// terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    /// Driving forward, watching for bumps.
    #[default]
    Idle,
    /// Bump seen and motion stopped; the next hazard signal starts reversing.
    ReverseReacting,
    /// A recovery phase is running; hazard signals are ignored.
    DuringProcess(RecoveryPhase),
    /// Reverse finished; the next hazard signal starts the spin.
    Spinning,
    /// Spin finished; the next hazard signal resumes forward driving.
    ResumeForward,
}

impl BehaviorState {
    /// `true` while a recovery phase is in flight.
    #[inline]
    pub fn is_during_process(self) -> bool {
        matches!(self, BehaviorState::DuringProcess(_))
    }

    /// The running recovery phase, if any.
    pub fn phase(self) -> Option<RecoveryPhase> {
        match self {
            BehaviorState::DuringProcess(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorState::Idle                                        => "idle",
            BehaviorState::ReverseReacting                             => "reverse_reacting",
            BehaviorState::DuringProcess(RecoveryPhase::Reversing)     => "during_process(reversing)",
            BehaviorState::DuringProcess(RecoveryPhase::Spinning { .. }) => "during_process(spinning)",
            BehaviorState::Spinning                                    => "spinning",
            BehaviorState::ResumeForward                               => "resume_forward",
        }
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

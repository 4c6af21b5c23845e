//! Effects — the actions a transition asks the runtime to perform.

use wd_core::Twist;
use wd_timer::TimerId;

/// One side effect of a behavior handler.
///
/// Handlers return effects in the order they must be applied.  A stop
/// `Publish` always precedes the `Arm` that starts the next phase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Send a velocity command to the drive base.
    Publish(Twist),

    /// (Re)start `timer`; it first fires `after_ms` from now.
    Arm {
        timer:    TimerId,
        after_ms: u64,
    },

    /// Stop `timer`; any pending fire is discarded.
    Cancel(TimerId),
}

impl Effect {
    /// The published twist, if this is a `Publish`.
    pub fn twist(&self) -> Option<&Twist> {
        match self {
            Effect::Publish(t) => Some(t),
            _ => None,
        }
    }

    /// `true` for a `Publish` with any non-zero component.
    pub fn is_motion(&self) -> bool {
        self.twist().is_some_and(|t| !t.is_zero())
    }
}

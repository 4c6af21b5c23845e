//! The `Behavior` trait — the seam between a policy and the runtime.

use wd_core::HazardBatch;
use wd_timer::{TimerId, TimerMode};

use crate::Effect;

/// A reactive drive policy.
///
/// The runtime registers [`timers`][Self::timers] once, applies
/// [`startup_effects`][Self::startup_effects], then calls the two event
/// handlers one at a time in delivery order.  Handlers run to completion and
/// their effects are applied before the next event, so implementations need
/// no locking.
pub trait Behavior {
    /// Every timer the policy may arm, with its firing mode.
    fn timers(&self) -> Vec<(TimerId, TimerMode)>;

    /// Effects applied once, right after the timers are registered.
    fn startup_effects(&mut self) -> Vec<Effect>;

    /// A hazard batch arrived (possibly empty).
    fn on_hazard_signal(&mut self, batch: &HazardBatch) -> Vec<Effect>;

    /// A registered timer fired.
    fn on_timer(&mut self, timer: TimerId) -> Vec<Effect>;
}

//! The `TimerService` trait — the timer backend a host provides.

use wd_core::Tick;

use crate::{TimerId, TimerMode, TimerQueue, TimerResult};

/// Named, cancelable timers.
///
/// A host adapter for a real middleware maps these calls onto its own wall
/// timers.  Whatever the backend, `cancel` must guarantee that no fire queued
/// before the call is delivered afterwards.
pub trait TimerService {
    /// Declare `timer` with its firing mode.  Registered timers start disarmed.
    fn register(&mut self, timer: TimerId, mode: TimerMode);

    /// (Re)start `timer`, first firing `period_ms` after `now`.
    fn arm(&mut self, timer: TimerId, now: Tick, period_ms: u64) -> TimerResult<()>;

    /// Stop `timer`; pending fires are discarded.
    fn cancel(&mut self, timer: TimerId);

    fn is_armed(&self, timer: TimerId) -> bool;
}

impl TimerService for TimerQueue {
    fn register(&mut self, timer: TimerId, mode: TimerMode) {
        TimerQueue::register(self, timer, mode);
    }

    fn arm(&mut self, timer: TimerId, now: Tick, period_ms: u64) -> TimerResult<()> {
        TimerQueue::arm(self, timer, now, period_ms)
    }

    fn cancel(&mut self, timer: TimerId) {
        TimerQueue::cancel(self, timer);
    }

    fn is_armed(&self, timer: TimerId) -> bool {
        TimerQueue::is_armed(self, timer)
    }
}

//! Runtime observer trait for progress reporting and data collection.

use wd_core::{HazardBatch, Tick};
use wd_timer::TimerId;

/// Callbacks invoked by [`Runtime::run`][crate::Runtime::run] around each
/// dispatched event.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait RuntimeObserver {
    /// Called at the very start of each tick, before any dispatch.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a timer fire has been handled and its effects applied.
    fn on_timer(&mut self, _tick: Tick, _timer: TimerId) {}

    /// Called after a hazard batch has been handled and its effects applied.
    fn on_hazard(&mut self, _tick: Tick, _batch: &HazardBatch) {}

    /// Called at the end of each tick.  `dispatched` counts timer fires plus
    /// hazard batches handled this tick.
    fn on_tick_end(&mut self, _tick: Tick, _dispatched: usize) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`RuntimeObserver`] that does nothing.
pub struct NoopObserver;

impl RuntimeObserver for NoopObserver {}

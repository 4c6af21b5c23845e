//! The `Runtime` struct and its dispatch loop.

use tracing::{info, trace};

use wd_behavior::{Behavior, Effect};
use wd_core::{HazardBatch, RunClock, RunConfig, Tick};
use wd_timer::{TimerId, TimerQueue, TimerService};

use crate::{HazardFeed, MotionSink, RuntimeObserver, RuntimeResult};

/// Event and command counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub timer_fires:    u64,
    pub hazard_batches: u64,
    pub commands:       u64,
}

/// Serialises timer fires and hazard batches into one [`Behavior`] and
/// applies the resulting effects to the timer queue and the motion sink.
///
/// Create via [`RuntimeBuilder`][crate::RuntimeBuilder].
pub struct Runtime<B: Behavior, S: MotionSink> {
    /// Run length, resolution, seed, heartbeat.
    pub config: RunConfig,

    /// Run clock — tracks the current tick.
    pub clock: RunClock,

    /// The behavior's timers.
    pub timers: TimerQueue,

    /// Scripted hazard batches and heartbeat.
    pub feed: HazardFeed,

    /// The behavior being driven.
    pub behavior: B,

    /// Receives every `Publish` effect.
    pub sink: S,

    pub(crate) stats: RunStats,
}

impl<B: Behavior, S: MotionSink> Runtime<B, S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: RuntimeObserver>(&mut self, observer: &mut O) -> RuntimeResult<()> {
        info!(
            ticks = self.config.total_ticks,
            tick_ms = self.config.tick_duration_ms,
            scripted = self.feed.remaining(),
            "run start"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_run_end(self.clock.current_tick);
        info!(
            timer_fires = self.stats.timer_fires,
            hazard_batches = self.stats.hazard_batches,
            commands = self.stats.commands,
            "run end"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: RuntimeObserver>(&mut self, n: u64, observer: &mut O) -> RuntimeResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run until the clock reaches `ms` milliseconds (exclusive).
    pub fn run_until_ms<O: RuntimeObserver>(&mut self, ms: u64, observer: &mut O) -> RuntimeResult<()> {
        let end = Tick(self.clock.ticks_for_ms(ms));
        while self.clock.current_tick < end {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Deliver an out-of-script hazard batch at the current tick.
    ///
    /// For hosts that push hazard messages as they arrive instead of
    /// scripting them.  `observer` sees the batch exactly as it sees a
    /// scripted one.
    pub fn deliver_hazard<O: RuntimeObserver>(
        &mut self,
        batch: &HazardBatch,
        observer: &mut O,
    ) -> RuntimeResult<()> {
        let now = self.clock.current_tick;
        self.dispatch_hazard(now, batch, observer)
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: RuntimeObserver>(&mut self, observer: &mut O) -> RuntimeResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let dispatched = self.process_tick(now, observer)?;
        observer.on_tick_end(now, dispatched);
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: RuntimeObserver>(&mut self, now: Tick, observer: &mut O) -> RuntimeResult<usize> {
        let mut dispatched = 0;

        // ── Phase 1: timers ───────────────────────────────────────────────
        //
        // Pop one at a time: effects of an earlier fire (e.g. ReverseStop
        // cancelling Reverse) must be applied before the next entry is
        // checked.
        while let Some(timer) = self.timers.pop_due(now) {
            self.fire(now, timer)?;
            observer.on_timer(now, timer);
            dispatched += 1;
        }

        // ── Phase 2: hazard feed ──────────────────────────────────────────
        if let Some(batch) = self.feed.take(now) {
            self.dispatch_hazard(now, &batch, observer)?;
            dispatched += 1;
        }

        Ok(dispatched)
    }

    fn dispatch_hazard<O: RuntimeObserver>(
        &mut self,
        now: Tick,
        batch: &HazardBatch,
        observer: &mut O,
    ) -> RuntimeResult<()> {
        trace!(tick = %now, detections = batch.len(), "hazard batch");
        self.stats.hazard_batches += 1;
        let effects = self.behavior.on_hazard_signal(batch);
        self.apply_effects(now, effects)?;
        observer.on_hazard(now, batch);
        Ok(())
    }

    fn fire(&mut self, now: Tick, timer: TimerId) -> RuntimeResult<()> {
        trace!(tick = %now, %timer, "timer fired");
        self.stats.timer_fires += 1;
        let effects = self.behavior.on_timer(timer);
        self.apply_effects(now, effects)
    }

    /// Apply effects in order.
    pub(crate) fn apply_effects(&mut self, now: Tick, effects: Vec<Effect>) -> RuntimeResult<()> {
        for effect in effects {
            match effect {
                Effect::Publish(twist) => {
                    self.sink.publish(now, &twist);
                    self.stats.commands += 1;
                }
                Effect::Arm { timer, after_ms } => {
                    TimerService::arm(&mut self.timers, timer, now, after_ms)?;
                }
                Effect::Cancel(timer) => {
                    TimerService::cancel(&mut self.timers, timer);
                }
            }
        }
        Ok(())
    }
}

//! Fluent builder for constructing a [`Runtime`].

use wd_behavior::Behavior;
use wd_core::{RunConfig, Tick};
use wd_timer::{TimerQueue, TimerService};

use crate::{HazardFeed, HazardScript, MotionSink, RunStats, Runtime, RuntimeResult};

/// Fluent builder for [`Runtime<B, S>`].
///
/// # Required inputs
///
/// - [`RunConfig`] — resolution, run length, heartbeat
/// - `B: Behavior` — the policy (e.g. [`wd_behavior::BehaviorController`])
/// - `S: MotionSink` — where commands go
///
/// # Optional inputs
///
/// | Method       | Default                 |
/// |--------------|-------------------------|
/// | `.script(s)` | Empty `HazardScript`    |
///
/// `build` registers the behavior's timers and applies its startup effects
/// at tick 0, so the returned runtime is already driving forward.
pub struct RuntimeBuilder<B: Behavior, S: MotionSink> {
    config:   RunConfig,
    behavior: B,
    sink:     S,
    script:   Option<HazardScript>,
}

impl<B: Behavior, S: MotionSink> RuntimeBuilder<B, S> {
    pub fn new(config: RunConfig, behavior: B, sink: S) -> Self {
        Self { config, behavior, sink, script: None }
    }

    /// Supply the hazard batches to deliver during the run.
    pub fn script(mut self, script: HazardScript) -> Self {
        self.script = Some(script);
        self
    }

    /// Validate inputs, register timers, apply startup effects.
    pub fn build(self) -> RuntimeResult<Runtime<B, S>> {
        self.config.validate()?;

        let clock = self.config.make_clock();
        let feed = HazardFeed::new(
            self.script.unwrap_or_default(),
            &clock,
            self.config.hazard_heartbeat_ms,
        );

        let mut timers = TimerQueue::new(self.config.tick_duration_ms);
        for (timer, mode) in self.behavior.timers() {
            TimerService::register(&mut timers, timer, mode);
        }

        let mut runtime = Runtime {
            clock,
            config:   self.config,
            timers,
            feed,
            behavior: self.behavior,
            sink:     self.sink,
            stats:    RunStats::default(),
        };

        let startup = runtime.behavior.startup_effects();
        runtime.apply_effects(Tick::ZERO, startup)?;
        Ok(runtime)
    }
}

//! `BehaviorController` — drive forward, back off and spin on a bump.
//!
//! # Transition table
//!
//! | From                        | Trigger           | To                       | Effects                                  |
//! |-----------------------------|-------------------|--------------------------|------------------------------------------|
//! | `Idle`                      | bump in batch     | `ReverseReacting`        | cancel ForwardDrive, stop                |
//! | `ReverseReacting`           | any hazard batch  | `DuringProcess(Reversing)` | arm Reverse, arm ReverseStop           |
//! | `DuringProcess(Reversing)`  | ReverseStop fires | `Spinning`               | cancel Reverse + ReverseStop, stop       |
//! | `Spinning`                  | any hazard batch  | `DuringProcess(Spinning)`  | arm Spin, draw duration, arm SpinStop  |
//! | `DuringProcess(Spinning)`   | SpinStop fires    | `ResumeForward`          | cancel Spin + SpinStop, stop             |
//! | `ResumeForward`             | any hazard batch  | `Idle`                   | arm ForwardDrive                         |
//! | `DuringProcess(_)`          | any hazard batch  | unchanged                | none                                     |
//!
//! Reversing starts on the hazard batch *after* the bump, not on the bump
//! itself.  The hazard feed publishes continuously, so in practice this is
//! the next feed message.
//!
//! A timer that fires while its phase is not running (possible only if a
//! host delivers a fire after cancelling it) produces no motion; the
//! controller answers with a `Cancel` for that timer.

use tracing::{debug, trace};

use wd_core::{BehaviorRng, HazardBatch, Twist};
use wd_timer::{TimerId, TimerMode};

use crate::{
    Behavior, BehaviorResult, BehaviorState, Effect, RecoveryPhase, SpinDuration, WanderConfig,
};

pub struct BehaviorController {
    config:      WanderConfig,
    state:       BehaviorState,
    rng:         BehaviorRng,
    /// Completed and in-flight spin draws since construction.
    spin_cycles: u64,
    last_spin:   Option<SpinDuration>,
}

impl BehaviorController {
    /// Validate `config` and start in `Idle`.
    pub fn new(config: WanderConfig, rng: BehaviorRng) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: BehaviorState::Idle,
            rng,
            spin_cycles: 0,
            last_spin: None,
        })
    }

    /// The deployed parameters with a seeded RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config:      WanderConfig::default(),
            state:       BehaviorState::Idle,
            rng:         BehaviorRng::new(seed),
            spin_cycles: 0,
            last_spin:   None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> BehaviorState {
        self.state
    }

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Number of spin durations drawn so far.
    pub fn spin_cycles(&self) -> u64 {
        self.spin_cycles
    }

    pub fn last_spin_duration(&self) -> Option<SpinDuration> {
        self.last_spin
    }

    // ── Hazard handling ───────────────────────────────────────────────────

    /// React to one hazard batch according to the transition table.
    pub fn on_hazard_signal(&mut self, batch: &HazardBatch) -> Vec<Effect> {
        match self.state {
            BehaviorState::Idle => {
                trace!(detections = batch.len(), "hazard batch while driving");
                for d in &batch.detections {
                    trace!(kind = %d.kind, frame = %d.frame_id, "hazard detection");
                }
                if !batch.contains_bump() {
                    return vec![];
                }
                let effects = self.on_forward_stop();
                self.transition(BehaviorState::ReverseReacting);
                effects
            }

            BehaviorState::ReverseReacting => {
                let effects = vec![
                    Effect::Arm { timer: TimerId::Reverse, after_ms: self.config.reverse_period_ms },
                    Effect::Arm { timer: TimerId::ReverseStop, after_ms: self.config.reverse_stop_ms },
                ];
                self.transition(BehaviorState::DuringProcess(RecoveryPhase::Reversing));
                effects
            }

            BehaviorState::Spinning => {
                let duration = SpinDuration::draw(
                    &mut self.rng,
                    self.config.spin_min_secs,
                    self.config.spin_max_secs,
                );
                self.spin_cycles += 1;
                self.last_spin = Some(duration);
                debug!(%duration, cycle = self.spin_cycles, "spin duration drawn");

                let effects = vec![
                    Effect::Arm { timer: TimerId::Spin, after_ms: self.config.spin_period_ms },
                    Effect::Arm { timer: TimerId::SpinStop, after_ms: duration.as_millis() },
                ];
                self.transition(BehaviorState::DuringProcess(RecoveryPhase::Spinning { duration }));
                effects
            }

            BehaviorState::ResumeForward => {
                let effects = vec![Effect::Arm {
                    timer:    TimerId::ForwardDrive,
                    after_ms: self.config.forward_period_ms,
                }];
                self.transition(BehaviorState::Idle);
                effects
            }

            BehaviorState::DuringProcess(_) => {
                trace!(state = %self.state, "hazard batch ignored during recovery");
                vec![]
            }
        }
    }

    // ── Timer handling ────────────────────────────────────────────────────

    /// Route a fired timer to its handler.
    pub fn on_timer(&mut self, timer: TimerId) -> Vec<Effect> {
        match timer {
            TimerId::ForwardDrive => self.on_forward_tick(),
            TimerId::ForwardStop  => self.on_forward_stop(),
            TimerId::Reverse      => self.on_reverse_tick(),
            TimerId::ReverseStop  => self.on_reverse_stop_tick(),
            TimerId::Spin         => self.on_spin_tick(),
            TimerId::SpinStop     => self.on_spin_stop_tick(),
        }
    }

    pub fn on_forward_tick(&mut self) -> Vec<Effect> {
        if self.state != BehaviorState::Idle {
            return self.stale(TimerId::ForwardDrive);
        }
        vec![publish(Twist::linear_x(self.config.forward_speed))]
    }

    /// Halt forward driving: cancel ForwardDrive and send a stop.
    pub fn on_forward_stop(&mut self) -> Vec<Effect> {
        vec![Effect::Cancel(TimerId::ForwardDrive), publish(Twist::zero())]
    }

    pub fn on_reverse_tick(&mut self) -> Vec<Effect> {
        if self.state.phase() != Some(RecoveryPhase::Reversing) {
            return self.stale(TimerId::Reverse);
        }
        vec![publish(Twist::linear_x(self.config.reverse_speed))]
    }

    pub fn on_reverse_stop_tick(&mut self) -> Vec<Effect> {
        if self.state.phase() != Some(RecoveryPhase::Reversing) {
            return self.stale(TimerId::ReverseStop);
        }
        let effects = vec![
            Effect::Cancel(TimerId::Reverse),
            Effect::Cancel(TimerId::ReverseStop),
            publish(Twist::zero()),
        ];
        self.transition(BehaviorState::Spinning);
        effects
    }

    pub fn on_spin_tick(&mut self) -> Vec<Effect> {
        if !matches!(self.state.phase(), Some(RecoveryPhase::Spinning { .. })) {
            return self.stale(TimerId::Spin);
        }
        vec![publish(Twist::angular_z(self.config.spin_rate))]
    }

    pub fn on_spin_stop_tick(&mut self) -> Vec<Effect> {
        if !matches!(self.state.phase(), Some(RecoveryPhase::Spinning { .. })) {
            return self.stale(TimerId::SpinStop);
        }
        let effects = vec![
            Effect::Cancel(TimerId::Spin),
            Effect::Cancel(TimerId::SpinStop),
            publish(Twist::zero()),
        ];
        self.transition(BehaviorState::ResumeForward);
        effects
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn transition(&mut self, next: BehaviorState) {
        debug!(from = %self.state, to = %next, "behavior transition");
        self.state = next;
    }

    fn stale(&self, timer: TimerId) -> Vec<Effect> {
        trace!(%timer, state = %self.state, "stale timer fire cancelled");
        vec![Effect::Cancel(timer)]
    }
}

/// Build a `Publish` effect, logging every component of the command.
fn publish(twist: Twist) -> Effect {
    let [lx, ly, lz, ax, ay, az] = twist.components();
    trace!(lx, ly, lz, ax, ay, az, "twist command");
    Effect::Publish(twist)
}

impl Behavior for BehaviorController {
    fn timers(&self) -> Vec<(TimerId, TimerMode)> {
        vec![
            (TimerId::ForwardDrive, TimerMode::Periodic),
            (TimerId::ForwardStop, TimerMode::OneShot),
            (TimerId::Reverse, TimerMode::Periodic),
            (TimerId::ReverseStop, TimerMode::OneShot),
            (TimerId::Spin, TimerMode::Periodic),
            (TimerId::SpinStop, TimerMode::OneShot),
        ]
    }

    /// Only ForwardDrive runs at startup; every other timer stays disarmed.
    fn startup_effects(&mut self) -> Vec<Effect> {
        vec![Effect::Arm {
            timer:    TimerId::ForwardDrive,
            after_ms: self.config.forward_period_ms,
        }]
    }

    fn on_hazard_signal(&mut self, batch: &HazardBatch) -> Vec<Effect> {
        BehaviorController::on_hazard_signal(self, batch)
    }

    fn on_timer(&mut self, timer: TimerId) -> Vec<Effect> {
        BehaviorController::on_timer(self, timer)
    }
}

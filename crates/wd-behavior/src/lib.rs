//! `wd-behavior` — the wanderer's behavior state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`state`]      | `BehaviorState`, `RecoveryPhase`                           |
//! | [`effect`]     | `Effect` (`Publish`, `Arm`, `Cancel`)                      |
//! | [`spin`]       | `SpinDuration` and its per-cycle draw                      |
//! | [`config`]     | `WanderConfig` — velocities, periods, spin bound           |
//! | [`model`]      | `Behavior` trait — what the runtime drives                 |
//! | [`controller`] | `BehaviorController` — the bump-and-spin policy            |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Design notes
//!
//! Handlers never touch timers or the motion sink directly.  Each one
//! mutates `state` and returns the list of effects the transition implies;
//! the runtime applies them in order before dispatching the next event.
//! The transition table in [`controller`] is therefore the only place that
//! decides which timers start and stop.
//!
//! ```text
//! Idle ──bump──▶ ReverseReacting ──hazard──▶ DuringProcess(Reversing)
//!   ▲                                              │ ReverseStop
//!   │                                              ▼
//! ResumeForward ◀──SpinStop── DuringProcess(Spinning) ◀──hazard── Spinning
//!   └──hazard──▶ Idle
//! ```

pub mod config;
pub mod controller;
pub mod effect;
pub mod error;
pub mod model;
pub mod spin;
pub mod state;


pub use config::{MAX_DELAY_MS, WanderConfig};
pub use controller::BehaviorController;
pub use effect::Effect;
pub use error::{BehaviorError, BehaviorResult};
pub use model::Behavior;
pub use spin::SpinDuration;
pub use state::{BehaviorState, RecoveryPhase};

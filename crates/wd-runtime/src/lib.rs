//! `wd-runtime` — host event loop for the wanderer.
//!
//! # Dispatch order
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Timers   — pop every live timer due at this tick, in arm order; call
//!                Behavior::on_timer and apply its effects before the next pop
//!                (a stop timer cancelling its sibling suppresses that fire).
//!   ② Hazards  — deliver the tick's hazard batch (scripted, else heartbeat)
//!                to Behavior::on_hazard_signal and apply its effects.
//! ```
//!
//! Everything runs on the caller's thread; no two handlers ever overlap.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`feed`]     | `HazardScript`, `HazardFeed`, CSV script loader             |
//! | [`sink`]     | `MotionSink` trait, `RecordingSink`                         |
//! | [`observer`] | `RuntimeObserver` trait, `NoopObserver`                     |
//! | [`runtime`]  | `Runtime`, `RunStats`                                       |
//! | [`builder`]  | `RuntimeBuilder`                                            |
//! | [`error`]    | `RuntimeError`, `RuntimeResult<T>`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wd_behavior::BehaviorController;
//! use wd_core::RunConfig;
//! use wd_runtime::{HazardScript, NoopObserver, RecordingSink, RuntimeBuilder};
//!
//! let mut rt = RuntimeBuilder::new(RunConfig::default(), BehaviorController::with_seed(1), RecordingSink::new())
//!     .script(HazardScript::new().bump_at(2_000))
//!     .build()?;
//! rt.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod feed;
pub mod observer;
pub mod runtime;
pub mod sink;


pub use builder::RuntimeBuilder;
pub use error::{RuntimeError, RuntimeResult};
pub use feed::{HazardFeed, HazardScript, load_hazard_script_csv, load_hazard_script_reader};
pub use observer::{NoopObserver, RuntimeObserver};
pub use runtime::{RunStats, Runtime};
pub use sink::{MotionSink, RecordingSink};

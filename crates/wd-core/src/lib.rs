//! `wd-core` — foundational types for the bump-and-spin wanderer.
//!
//! This crate is a dependency of every other `wd-*` crate.  It has no `wd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`time`]   | `Tick`, `RunClock`, `RunConfig`                           |
//! | [`rng`]    | `BehaviorRng` (seeded, reproducible)                      |
//! | [`twist`]  | `Vector3`, `Twist` — six-component velocity command       |
//! | [`hazard`] | `HazardKind`, `HazardDetection`, `HazardBatch`            |
//! | [`error`]  | `WdError`, `WdResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod hazard;
pub mod rng;
pub mod time;
pub mod twist;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WdError, WdResult};
pub use hazard::{HazardBatch, HazardDetection, HazardKind};
pub use rng::BehaviorRng;
pub use time::{RunClock, RunConfig, Tick};
pub use twist::{Twist, Vector3};

//! `wd-timer` — the wanderer's timer set and its tick queue.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`id`]      | `TimerId`, `TimerMode`                                    |
//! | [`queue`]   | `TimerQueue` (`BTreeMap<Tick, VecDeque<(TimerId, gen)>>`) |
//! | [`service`] | `TimerService` trait — what a host timer backend offers   |
//! | [`error`]   | `TimerError`, `TimerResult<T>`                            |
//!
//! # Cancellation model
//!
//! Every timer slot carries a generation counter.  Arming or cancelling a
//! timer bumps its generation; queue entries remember the generation they
//! were pushed with.  When a tick is drained, entries whose generation no
//! longer matches are dropped, so a cancelled timer can never fire late and
//! a re-armed timer fires only on its new schedule.

pub mod error;
pub mod id;
pub mod queue;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{TimerError, TimerResult};
pub use id::{TimerId, TimerMode};
pub use queue::TimerQueue;
pub use service::TimerService;

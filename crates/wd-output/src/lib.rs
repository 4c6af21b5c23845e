//! `wd-output` — CSV logs for wanderer runs.
//!
//! | Type               | Role                          | File            |
//! |--------------------|-------------------------------|-----------------|
//! | [`CsvCommandSink`] | `wd_runtime::MotionSink`      | `commands.csv`  |
//! | [`CsvEventLog`]    | `wd_runtime::RuntimeObserver` | `events.csv`    |
//!
//! Neither hook can fail from the runtime's point of view.  The first write
//! error is stored and retrieved with `take_error` after the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wd_output::{CsvCommandSink, CsvEventLog};
//!
//! let sink = CsvCommandSink::new(&dir.join("commands.csv"), config.tick_duration_ms)?;
//! let mut events = CsvEventLog::new(&dir.join("events.csv"), config.tick_duration_ms)?;
//! let mut rt = RuntimeBuilder::new(config, controller, sink).build()?;
//! rt.run(&mut events)?;
//! rt.sink.finish()?;
//! ```

pub mod commands;
pub mod error;
pub mod events;
pub mod row;

#[cfg(test)]
mod tests;

pub use commands::CsvCommandSink;
pub use error::{OutputError, OutputResult};
pub use events::CsvEventLog;
pub use row::{CommandRow, EventRow};

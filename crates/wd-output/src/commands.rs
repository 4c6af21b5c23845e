//! `commands.csv` — every velocity command the behavior published.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::warn;

use wd_core::{Tick, Twist};
use wd_runtime::MotionSink;

use crate::{CommandRow, OutputError, OutputResult};

/// A [`MotionSink`] that appends each command to a CSV file.
pub struct CsvCommandSink {
    writer:           Writer<File>,
    tick_duration_ms: u32,
    rows:             u64,
    error:            Option<OutputError>,
    finished:         bool,
}

impl CsvCommandSink {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path, tick_duration_ms: u32) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(CommandRow::HEADER)?;
        Ok(Self {
            writer,
            tick_duration_ms,
            rows: 0,
            error: None,
            finished: false,
        })
    }

    /// Rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the first write error, if any occurred.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.error.take()
    }

    /// Flush the file.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

impl MotionSink for CsvCommandSink {
    fn publish(&mut self, at: Tick, twist: &Twist) {
        if self.error.is_some() {
            return;
        }
        let row = CommandRow::new(at, self.tick_duration_ms, twist);
        match self.writer.write_record(row.record()) {
            Ok(()) => self.rows += 1,
            Err(e) => {
                warn!(tick = %at, "command log write failed: {e}");
                self.error = Some(e.into());
            }
        }
    }
}

//! `events.csv` — every timer fire and hazard batch the runtime dispatched.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::warn;

use wd_core::{HazardBatch, Tick};
use wd_runtime::RuntimeObserver;
use wd_timer::TimerId;

use crate::{EventRow, OutputError, OutputResult};

/// A [`RuntimeObserver`] that logs dispatched events to a CSV file.
///
/// Empty heartbeat batches are skipped unless `with_heartbeats(true)`.
pub struct CsvEventLog {
    writer:           Writer<File>,
    tick_duration_ms: u32,
    heartbeats:       bool,
    rows:             u64,
    error:            Option<OutputError>,
}

impl CsvEventLog {
    pub fn new(path: &Path, tick_duration_ms: u32) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(EventRow::HEADER)?;
        Ok(Self {
            writer,
            tick_duration_ms,
            heartbeats: false,
            rows: 0,
            error: None,
        })
    }

    /// Also log empty hazard batches.
    pub fn with_heartbeats(mut self, yes: bool) -> Self {
        self.heartbeats = yes;
        self
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.error.take()
    }

    fn write(&mut self, row: EventRow) {
        if self.error.is_some() {
            return;
        }
        let result = self.writer.write_record([
            row.tick.to_string(),
            row.time_ms.to_string(),
            row.source.to_owned(),
            row.detail,
        ]);
        match result {
            Ok(()) => self.rows += 1,
            Err(e) => {
                warn!(tick = row.tick, "event log write failed: {e}");
                self.error = Some(e.into());
            }
        }
    }

    fn row(&self, tick: Tick, source: &'static str, detail: String) -> EventRow {
        EventRow {
            tick: tick.0,
            time_ms: tick.0 * self.tick_duration_ms as u64,
            source,
            detail,
        }
    }
}

impl RuntimeObserver for CsvEventLog {
    fn on_timer(&mut self, tick: Tick, timer: TimerId) {
        let row = self.row(tick, "timer", timer.to_string());
        self.write(row);
    }

    fn on_hazard(&mut self, tick: Tick, batch: &HazardBatch) {
        if batch.is_empty() && !self.heartbeats {
            return;
        }
        let detail = if batch.is_empty() {
            "empty".to_owned()
        } else {
            batch
                .detections
                .iter()
                .map(|d| d.kind.to_string())
                .collect::<Vec<_>>()
                .join("|")
        };
        let row = self.row(tick, "hazard", detail);
        self.write(row);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        if self.error.is_none() {
            if let Err(e) = self.writer.flush() {
                self.error = Some(e.into());
            }
        }
    }
}

//! Hazard feed: scripted batches plus an optional empty-batch heartbeat.
//!
//! # CSV format
//!
//! One row per detection.  Rows sharing a `time_ms` form one batch; a row
//! with an empty `kind` is an explicitly empty batch.
//!
//! ```csv
//! time_ms,kind,frame_id
//! 2000,bump,bump_front_left
//! 2000,cliff,cliff_front_left
//! 2100,,
//! 9000,1,bump_right
//! ```
//!
//! **`kind`** is a label (`bump`, `cliff`, `stall`, `wheel_drop`,
//! `object_proximity`, `backup`) or a numeric wire code.  Unknown numeric
//! codes load as `HazardKind::Unknown`; unknown labels are rejected.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wd_core::{HazardBatch, HazardDetection, HazardKind, RunClock, Tick};

use crate::{RuntimeError, RuntimeResult};

// ── HazardScript ──────────────────────────────────────────────────────────────

/// Hazard batches keyed by delivery time in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct HazardScript {
    batches: BTreeMap<u64, HazardBatch>,
}

impl HazardScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `batch` at `at_ms`, merging with any batch already at that time.
    pub fn push(&mut self, at_ms: u64, batch: HazardBatch) {
        self.batches
            .entry(at_ms)
            .or_default()
            .detections
            .extend(batch.detections);
    }

    /// Builder form of [`push`][Self::push].
    pub fn with(mut self, at_ms: u64, batch: HazardBatch) -> Self {
        self.push(at_ms, batch);
        self
    }

    /// Shorthand for a single front-bumper contact at `at_ms`.
    pub fn bump_at(self, at_ms: u64) -> Self {
        self.with(at_ms, HazardBatch::new(vec![HazardDetection::new(HazardKind::Bump, "bump_front_center")]))
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &HazardBatch)> {
        self.batches.iter().map(|(&t, b)| (t, b))
    }
}

// ── HazardFeed ────────────────────────────────────────────────────────────────

/// A script resolved to ticks, plus the heartbeat cadence.
///
/// At most one batch is delivered per tick: the scripted one if present,
/// otherwise an empty heartbeat batch on heartbeat ticks.
#[derive(Debug, Default)]
pub struct HazardFeed {
    scripted:        BTreeMap<Tick, HazardBatch>,
    heartbeat_ticks: Option<u64>,
}

impl HazardFeed {
    /// Resolve `script` times to ticks of `clock` (rounding up).  Batches that
    /// land on the same tick are merged.
    pub fn new(script: HazardScript, clock: &RunClock, heartbeat_ms: Option<u64>) -> Self {
        let mut scripted: BTreeMap<Tick, HazardBatch> = BTreeMap::new();
        for (at_ms, batch) in script.batches {
            scripted
                .entry(Tick(clock.ticks_for_ms(at_ms)))
                .or_default()
                .detections
                .extend(batch.detections);
        }
        Self {
            scripted,
            heartbeat_ticks: heartbeat_ms.map(|ms| clock.ticks_for_ms(ms).max(1)),
        }
    }

    /// Remove and return the batch due at `now`, if any.
    pub fn take(&mut self, now: Tick) -> Option<HazardBatch> {
        if let Some(batch) = self.scripted.remove(&now) {
            return Some(batch);
        }
        match self.heartbeat_ticks {
            Some(every) if now.0 > 0 && now.0 % every == 0 => Some(HazardBatch::empty()),
            _ => None,
        }
    }

    /// Scripted batches not yet delivered.
    pub fn remaining(&self) -> usize {
        self.scripted.len()
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HazardRecord {
    time_ms:  u64,
    #[serde(default)]
    kind:     String,
    #[serde(default)]
    frame_id: String,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Load a [`HazardScript`] from a CSV file.
pub fn load_hazard_script_csv(path: &Path) -> RuntimeResult<HazardScript> {
    let file = std::fs::File::open(path).map_err(RuntimeError::Io)?;
    load_hazard_script_reader(file)
}

/// Like [`load_hazard_script_csv`] but accepts any `Read` source.
pub fn load_hazard_script_reader<R: Read>(reader: R) -> RuntimeResult<HazardScript> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut script = HazardScript::new();

    for result in csv_reader.deserialize::<HazardRecord>() {
        let row = result.map_err(|e| RuntimeError::Parse(e.to_string()))?;
        let batch = if row.kind.is_empty() {
            HazardBatch::empty()
        } else {
            let kind: HazardKind = row.kind.parse()?;
            HazardBatch::new(vec![HazardDetection::new(kind, row.frame_id)])
        };
        script.push(row.time_ms, batch);
    }

    Ok(script)
}

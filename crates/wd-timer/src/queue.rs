//! `TimerQueue` — sparse per-tick timer expiry queue.
//!
//! Armed timers register the tick at which they fire next.  Each tick the
//! runtime pops only the timers due at that tick, one at a time, so that the
//! effects of one fire (e.g. cancelling a sibling timer due at the same tick)
//! are visible before the next entry is examined.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! future fire ticks.  With six timers W never exceeds a dozen or so.

use std::collections::{BTreeMap, VecDeque};

use wd_core::Tick;

use crate::{TimerError, TimerId, TimerMode, TimerResult};

// ── TimerSlot ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct TimerSlot {
    mode:         TimerMode,
    /// Period in ticks, set on every arm.
    period_ticks: u64,
    /// Bumped on every arm and cancel; stale queue entries are skipped.
    generation:   u64,
    /// Next fire tick while armed.
    due:          Option<Tick>,
}

// ── TimerQueue ────────────────────────────────────────────────────────────────

/// Registered timers plus a queue mapping ticks → timers due at that tick.
pub struct TimerQueue {
    slots:            [Option<TimerSlot>; TimerId::COUNT],
    inner:            BTreeMap<Tick, VecDeque<(TimerId, u64)>>,
    /// Cached entry count (live and stale) for O(1) `pending_entries()`.
    total:            usize,
    tick_duration_ms: u32,
}

impl TimerQueue {
    /// Create an empty queue whose millisecond periods are quantised to
    /// `tick_duration_ms`.
    pub fn new(tick_duration_ms: u32) -> Self {
        Self {
            slots:            Default::default(),
            inner:            BTreeMap::new(),
            total:            0,
            tick_duration_ms: tick_duration_ms.max(1),
        }
    }

    /// Declare a timer.  Re-registering replaces the mode and disarms it.
    pub fn register(&mut self, timer: TimerId, mode: TimerMode) {
        let generation = self.slots[timer.index()]
            .as_ref()
            .map_or(0, |s| s.generation + 1);
        self.slots[timer.index()] = Some(TimerSlot {
            mode,
            period_ticks: 0,
            generation,
            due: None,
        });
    }

    /// (Re)start `timer` so it first fires `period_ms` after `now`.
    ///
    /// Periodic timers keep firing every `period_ms` until cancelled.  Any
    /// previously queued fire for this timer is invalidated.
    pub fn arm(&mut self, timer: TimerId, now: Tick, period_ms: u64) -> TimerResult<()> {
        if period_ms == 0 {
            return Err(TimerError::ZeroPeriod(timer));
        }
        let period_ticks = period_ms.div_ceil(self.tick_duration_ms as u64);
        let slot = self.slots[timer.index()]
            .as_mut()
            .ok_or(TimerError::Unregistered(timer))?;

        let due = now
            .0
            .checked_add(period_ticks)
            .map(Tick)
            .ok_or(TimerError::Overflow(timer))?;
        slot.generation += 1;
        slot.period_ticks = period_ticks;
        slot.due = Some(due);
        let generation = slot.generation;
        self.push(due, timer, generation);
        Ok(())
    }

    /// Disarm `timer`.  Cancelling an unarmed or unregistered timer is a no-op.
    pub fn cancel(&mut self, timer: TimerId) {
        if let Some(slot) = self.slots[timer.index()].as_mut() {
            slot.generation += 1;
            slot.due = None;
        }
    }

    pub fn is_registered(&self, timer: TimerId) -> bool {
        self.slots[timer.index()].is_some()
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.due_tick(timer).is_some()
    }

    /// The tick at which `timer` fires next, if armed.
    pub fn due_tick(&self, timer: TimerId) -> Option<Tick> {
        self.slots[timer.index()].as_ref().and_then(|s| s.due)
    }

    /// Remove and return the next live timer due at exactly `now`.
    ///
    /// Periodic timers are re-queued one period later before returning;
    /// one-shot timers are disarmed.  Returns `None` once no live entry is
    /// left for `now`.
    pub fn pop_due(&mut self, now: Tick) -> Option<TimerId> {
        loop {
            let entries = self.inner.get_mut(&now)?;
            let Some((timer, generation)) = entries.pop_front() else {
                self.inner.remove(&now);
                return None;
            };
            self.total -= 1;
            if entries.is_empty() {
                self.inner.remove(&now);
            }

            let Some(slot) = self.slots[timer.index()].as_mut() else {
                continue;
            };
            if slot.generation != generation || slot.due != Some(now) {
                continue;
            }

            let mode = slot.mode;
            match mode {
                TimerMode::Periodic => match now.0.checked_add(slot.period_ticks) {
                    Some(next) => {
                        slot.due = Some(Tick(next));
                        self.push(Tick(next), timer, generation);
                    }
                    None => slot.due = None,
                },
                TimerMode::OneShot => slot.due = None,
            }
            return Some(timer);
        }
    }

    /// The earliest tick with at least one queued entry, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Number of armed timers.
    pub fn armed_count(&self) -> usize {
        self.slots.iter().flatten().filter(|s| s.due.is_some()).count()
    }

    /// Total queued entries, including stale ones not yet drained.
    pub fn pending_entries(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn tick_duration_ms(&self) -> u32 {
        self.tick_duration_ms
    }

    fn push(&mut self, tick: Tick, timer: TimerId, generation: u64) {
        self.inner.entry(tick).or_default().push_back((timer, generation));
        self.total += 1;
    }
}

//! Motion command output.

use wd_core::{Tick, Twist};

/// Where velocity commands go.
///
/// Publishing is assumed not to fail inline.  Sinks backed by fallible I/O
/// keep the first error internally and expose it after the run.
pub trait MotionSink {
    fn publish(&mut self, at: Tick, twist: &Twist);
}

impl<S: MotionSink + ?Sized> MotionSink for &mut S {
    fn publish(&mut self, at: Tick, twist: &Twist) {
        (**self).publish(at, twist);
    }
}

impl<S: MotionSink + ?Sized> MotionSink for Box<S> {
    fn publish(&mut self, at: Tick, twist: &Twist) {
        (**self).publish(at, twist);
    }
}

/// Keeps every published command in memory, in publish order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub commands: Vec<(Tick, Twist)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn last(&self) -> Option<&(Tick, Twist)> {
        self.commands.last()
    }

    /// Commands published in `[from, to)`.
    pub fn between(&self, from: Tick, to: Tick) -> impl Iterator<Item = &(Tick, Twist)> {
        self.commands.iter().filter(move |(t, _)| *t >= from && *t < to)
    }
}

impl MotionSink for RecordingSink {
    fn publish(&mut self, at: Tick, twist: &Twist) {
        self.commands.push((at, *twist));
    }
}

//! Plain data row types written by the CSV logs.

use wd_core::{Tick, Twist};

/// One published velocity command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandRow {
    pub tick:      u64,
    pub time_ms:   u64,
    pub linear_x:  f64,
    pub linear_y:  f64,
    pub linear_z:  f64,
    pub angular_x: f64,
    pub angular_y: f64,
    pub angular_z: f64,
}

impl CommandRow {
    pub const HEADER: [&'static str; 8] = [
        "tick", "time_ms", "linear_x", "linear_y", "linear_z", "angular_x", "angular_y", "angular_z",
    ];

    pub fn new(tick: Tick, tick_duration_ms: u32, twist: &Twist) -> Self {
        let [linear_x, linear_y, linear_z, angular_x, angular_y, angular_z] = twist.components();
        Self {
            tick: tick.0,
            time_ms: tick.0 * tick_duration_ms as u64,
            linear_x,
            linear_y,
            linear_z,
            angular_x,
            angular_y,
            angular_z,
        }
    }

    pub fn record(&self) -> [String; 8] {
        [
            self.tick.to_string(),
            self.time_ms.to_string(),
            self.linear_x.to_string(),
            self.linear_y.to_string(),
            self.linear_z.to_string(),
            self.angular_x.to_string(),
            self.angular_y.to_string(),
            self.angular_z.to_string(),
        ]
    }
}

/// One dispatched event: a timer fire or a hazard batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:    u64,
    pub time_ms: u64,
    /// `"timer"` or `"hazard"`.
    pub source:  &'static str,
    /// Timer name, or `|`-joined hazard kinds (`"empty"` for an empty batch).
    pub detail:  String,
}

impl EventRow {
    pub const HEADER: [&'static str; 4] = ["tick", "time_ms", "source", "detail"];
}

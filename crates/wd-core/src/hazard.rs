//! Hazard records delivered by the robot's hazard feed.
//!
//! Numeric codes follow the Create 3 `HazardDetection` message.  Codes the
//! table doesn't know are kept as `Unknown(code)` rather than rejected; they
//! never count as a bump.

use std::str::FromStr;

use crate::WdError;

/// The category of a single hazard detection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HazardKind {
    /// Reverse motion hit the backup safety limit.
    Backup,
    /// Front bumper contact.
    Bump,
    Cliff,
    /// Wheel stall.
    Stall,
    WheelDrop,
    /// IR proximity sensor reports a close object.
    ObjectProximity,
    Unknown(u8),
}

impl HazardKind {
    /// Decode a wire code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => HazardKind::Backup,
            1 => HazardKind::Bump,
            2 => HazardKind::Cliff,
            3 => HazardKind::Stall,
            4 => HazardKind::WheelDrop,
            5 => HazardKind::ObjectProximity,
            n => HazardKind::Unknown(n),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            HazardKind::Backup          => 0,
            HazardKind::Bump            => 1,
            HazardKind::Cliff           => 2,
            HazardKind::Stall           => 3,
            HazardKind::WheelDrop       => 4,
            HazardKind::ObjectProximity => 5,
            HazardKind::Unknown(n)      => n,
        }
    }

    #[inline]
    pub fn is_bump(self) -> bool {
        matches!(self, HazardKind::Bump)
    }

    /// Label used in hazard scripts and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            HazardKind::Backup          => "backup",
            HazardKind::Bump            => "bump",
            HazardKind::Cliff           => "cliff",
            HazardKind::Stall           => "stall",
            HazardKind::WheelDrop       => "wheel_drop",
            HazardKind::ObjectProximity => "object_proximity",
            HazardKind::Unknown(_)      => "unknown",
        }
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HazardKind::Unknown(n) => write!(f, "unknown({n})"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for HazardKind {
    type Err = WdError;

    /// Accepts a label (`"bump"`) or a numeric wire code (`"1"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "backup"           => Ok(HazardKind::Backup),
            "bump"             => Ok(HazardKind::Bump),
            "cliff"            => Ok(HazardKind::Cliff),
            "stall"            => Ok(HazardKind::Stall),
            "wheel_drop"       => Ok(HazardKind::WheelDrop),
            "object_proximity" => Ok(HazardKind::ObjectProximity),
            n => n
                .parse::<u8>()
                .map(HazardKind::from_code)
                .map_err(|_| WdError::UnknownHazard(n.to_owned())),
        }
    }
}

// ── HazardDetection ──────────────────────────────────────────────────────────

/// One hazard record within a batch.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardDetection {
    pub kind:     HazardKind,
    /// Sensor frame that reported the hazard, e.g. `"bump_front_left"`.
    pub frame_id: String,
}

impl HazardDetection {
    pub fn new(kind: HazardKind, frame_id: impl Into<String>) -> Self {
        Self { kind, frame_id: frame_id.into() }
    }
}

// ── HazardBatch ──────────────────────────────────────────────────────────────

/// One delivered hazard notification: zero or more detections.
///
/// The hazard topic publishes continuously, so empty batches are normal.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardBatch {
    pub detections: Vec<HazardDetection>,
}

impl HazardBatch {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(detections: Vec<HazardDetection>) -> Self {
        Self { detections }
    }

    /// A batch with one record per kind, frame ids left blank.
    pub fn of_kinds(kinds: &[HazardKind]) -> Self {
        Self {
            detections: kinds.iter().map(|&k| HazardDetection::new(k, "")).collect(),
        }
    }

    /// `true` if any record in the batch is a bump.
    pub fn contains_bump(&self) -> bool {
        self.detections.iter().any(|d| d.kind.is_bump())
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

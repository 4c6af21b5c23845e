//! Six-component velocity command sent to the drive base.

use std::fmt;

/// A 3-axis vector (x, y, z).
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Linear and angular velocity, in the robot's base frame.
///
/// The wanderer only ever sets `linear.x` and `angular.z`; the other four
/// components are always zero.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Twist {
    pub linear:  Vector3,
    pub angular: Vector3,
}

impl Twist {
    /// All six components zero: stop.
    #[inline]
    pub const fn zero() -> Self {
        Self { linear: Vector3::ZERO, angular: Vector3::ZERO }
    }

    /// Straight-line motion along the base x axis.
    #[inline]
    pub const fn linear_x(v: f64) -> Self {
        Self { linear: Vector3::new(v, 0.0, 0.0), angular: Vector3::ZERO }
    }

    /// In-place rotation about the base z axis.
    #[inline]
    pub const fn angular_z(w: f64) -> Self {
        Self { linear: Vector3::ZERO, angular: Vector3::new(0.0, 0.0, w) }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.linear.is_zero() && self.angular.is_zero()
    }

    /// Components in wire order: linear x/y/z, angular x/y/z.
    pub fn components(&self) -> [f64; 6] {
        [
            self.linear.x,
            self.linear.y,
            self.linear.z,
            self.angular.x,
            self.angular.y,
            self.angular.z,
        ]
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear({:.4}, {:.4}, {:.4}) angular({:.4}, {:.4}, {:.4})",
            self.linear.x, self.linear.y, self.linear.z,
            self.angular.x, self.angular.y, self.angular.z,
        )
    }
}

//! Angle units and polar projection.

use serde::{Deserialize, Serialize};

use crate::Point2;

/// Unit in which slit edge angles are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}

impl AngleUnit {
    /// Raw unit annotation that selects degrees. Anything else means radians.
    pub const DEGREES_TAG: &'static [u8] = b"deg";

    /// Interpret a raw unit annotation.
    pub fn from_annotation(units: &[u8]) -> Self {
        if units == Self::DEGREES_TAG {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }

    pub fn is_degrees(self) -> bool {
        self == AngleUnit::Degrees
    }

    /// Convert an angle in this unit to radians.
    pub fn to_radians(self, theta: f64) -> f64 {
        match self {
            AngleUnit::Degrees => theta.to_radians(),
            AngleUnit::Radians => theta,
        }
    }

    pub fn to_degrees(self, theta: f64) -> f64 {
        match self {
            AngleUnit::Degrees => theta,
            AngleUnit::Radians => theta.to_degrees(),
        }
    }

    /// One full revolution in this unit.
    pub fn full_turn(self) -> f64 {
        match self {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Radians => std::f64::consts::TAU,
        }
    }
}

/// Project `(radius, theta)` onto the XY plane.
///
/// `theta = 0` lies on +X and angles grow counter-clockwise.
pub fn polar_to_cartesian(radius: f64, theta: f64, unit: AngleUnit) -> Point2 {
    let theta = unit.to_radians(theta);
    Point2::new(radius * theta.cos(), radius * theta.sin())
}

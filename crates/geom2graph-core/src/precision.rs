// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric precision models.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// Ratio between the largest input ordinate and the derived snap tolerance for
/// floating models.
pub const SNAP_TOLERANCE_FACTOR: f64 = 1e12;

/// Lower bound of any derived snap tolerance.
pub const MIN_SNAP_TOLERANCE: f64 = 1e-12;

/// How ordinates are rounded when new coordinates (intersections) are created.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrecisionModel {
    /// Full `f64` precision; no rounding.
    #[default]
    Floating,
    /// Ordinates are rounded to multiples of `1 / scale`.
    Fixed {
        /// Grid cells per unit.
        scale: f64,
    },
}

impl PrecisionModel {
    /// Fixed model with `scale` cells per unit.
    #[must_use]
    pub const fn fixed(scale: f64) -> Self {
        Self::Fixed { scale }
    }

    /// Rounds one ordinate.
    #[must_use]
    pub fn make_precise(&self, v: f64) -> f64 {
        match *self {
            Self::Floating => v,
            Self::Fixed { scale } => (v * scale).round() / scale,
        }
    }

    /// Rounds the planar ordinates of `c`; payload is untouched.
    #[must_use]
    pub fn make_precise_coord(&self, c: Coordinate) -> Coordinate {
        Coordinate { x: self.make_precise(c.x), y: self.make_precise(c.y), ..c }
    }

    /// Snap tolerance used by the fallback noder.
    ///
    /// Fixed models snap to their grid size. Floating models scale with the
    /// largest absolute ordinate of the input (`magnitude`).
    #[must_use]
    pub fn snap_tolerance(&self, magnitude: f64) -> f64 {
        match *self {
            Self::Fixed { scale } => 1.0 / scale,
            Self::Floating => (magnitude.abs() / SNAP_TOLERANCE_FACTOR).max(MIN_SNAP_TOLERANCE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_to_grid() {
        let pm = PrecisionModel::fixed(10.0);
        assert!((pm.make_precise(1.26) - 1.3).abs() < 1e-12);
        assert!((pm.make_precise(-0.04) - 0.0).abs() < 1e-12);
        let c = pm.make_precise_coord(Coordinate::new_z(0.123, 4.56, 7.891));
        assert!((c.x - 0.1).abs() < 1e-12);
        assert!((c.y - 4.6).abs() < 1e-12);
        assert_eq!(c.z, Some(7.891));
    }

    #[test]
    fn floating_is_identity() {
        let pm = PrecisionModel::Floating;
        assert_eq!(pm.make_precise(0.1 + 0.2), 0.1 + 0.2);
    }

    #[test]
    fn snap_tolerance_derivation() {
        assert!((PrecisionModel::fixed(100.0).snap_tolerance(1e6) - 0.01).abs() < 1e-15);
        assert_eq!(PrecisionModel::Floating.snap_tolerance(0.0), MIN_SNAP_TOLERANCE);
        assert!((PrecisionModel::Floating.snap_tolerance(-2e12) - 2.0).abs() < 1e-9);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Coordinates and the planar key used for deduplication.
//!
//! Identity notes:
//! - Two coordinates are the same graph vertex iff their `(x, y)` projections
//!   are equal. `z` and `m` are carried along but never compared.
//! - `0.0` and `-0.0` map to the same key; every NaN maps to one key.

use serde::Serialize;

/// An immutable point with optional elevation and measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Easting.
    pub x: f64,
    /// Northing.
    pub y: f64,
    /// Elevation payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Measure payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
}

impl Coordinate {
    /// Creates a 2D coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None, m: None }
    }

    /// Creates a 3D coordinate.
    #[must_use]
    pub const fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z), m: None }
    }

    /// Returns a copy carrying the given measure.
    #[must_use]
    pub const fn with_m(self, m: f64) -> Self {
        Self { m: Some(m), ..self }
    }

    /// Key of the planar projection.
    #[must_use]
    pub fn planar_key(&self) -> PlanarKey {
        PlanarKey::new(self.x, self.y)
    }

    /// `true` if the planar projections are equal.
    #[must_use]
    pub fn equals_2d(&self, other: &Self) -> bool {
        self.planar_key() == other.planar_key()
    }

    /// `true` if both planar ordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Planar Euclidean distance.
    #[must_use]
    pub fn distance_2d(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Planar projection as a `geo` coordinate.
    #[must_use]
    pub fn xy(&self) -> geo::Coord<f64> {
        geo::Coord { x: self.x, y: self.y }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

/// Normalized bit pattern of a planar `(x, y)` pair.
///
/// Ordering is by bit pattern, not numerically; it only exists so the key can
/// live in ordered maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanarKey {
    x: u64,
    y: u64,
}

impl PlanarKey {
    /// Builds the key for `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: normalized_bits(x), y: normalized_bits(y) }
    }
}

fn normalized_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0_f64.to_bits()
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

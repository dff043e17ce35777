// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Orchestrates noding of a whole geometry: segment extraction, strategy
//! selection, and the single robustness fallback.

use std::collections::BTreeSet;

use tracing::debug;

use super::iterated::IteratedNoder;
use super::segment_string::SegmentString;
use super::snapping::SnappingNoder;
use super::Noder;
use crate::coord::PlanarKey;
use crate::error::{MalformedGeometryError, NoderError, NodingError};
use crate::geometry::{Geometry, LineKind, LineString};
use crate::precision::PrecisionModel;

/// Nodes geometries with a primary strategy and one fallback.
///
/// Without an explicit noder the primary strategy is an [`IteratedNoder`] for
/// the configured precision model. When the primary reports
/// [`NoderError::Robustness`], noding is retried exactly once with the fallback
/// (by default a [`SnappingNoder`] whose tolerance comes from
/// [`PrecisionModel::snap_tolerance`]).
#[derive(Default)]
pub struct GeometryNoder {
    precision: PrecisionModel,
    noder: Option<Box<dyn Noder>>,
    fallback: Option<Box<dyn Noder>>,
}

impl GeometryNoder {
    /// Creates an orchestrator for geometries declared with `precision`.
    #[must_use]
    pub fn new(precision: PrecisionModel) -> Self {
        Self { precision, noder: None, fallback: None }
    }

    /// Uses `noder` verbatim as the primary strategy.
    #[must_use]
    pub fn with_noder(mut self, noder: Box<dyn Noder>) -> Self {
        self.noder = Some(noder);
        self
    }

    /// Replaces the default fallback strategy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Box<dyn Noder>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Nodes every line-bearing sub-geometry of `geometry` together.
    ///
    /// The result is always a [`Geometry::MultiLineString`].
    pub fn node(&self, geometry: &Geometry) -> Result<Geometry, NodingError> {
        let segments = extract_segment_strings(geometry)?;
        debug!(segment_strings = segments.len(), "noding geometry");

        let default_primary;
        let primary: &dyn Noder = match &self.noder {
            Some(noder) => noder.as_ref(),
            None => {
                default_primary = IteratedNoder::new(self.precision);
                &default_primary
            }
        };

        match primary.compute_nodes(segments.clone()) {
            Ok(noded) => Ok(to_multi_line_string(noded)),
            Err(NoderError::Robustness(reason)) => {
                debug!(%reason, "primary noder failed; retrying with fallback");
                let primary_err = NoderError::Robustness(reason);
                let result = match &self.fallback {
                    Some(fallback) => fallback.compute_nodes(segments),
                    None => {
                        let tolerance = self.precision.snap_tolerance(magnitude(&segments));
                        debug!(tolerance, "using snapping fallback");
                        SnappingNoder::new(tolerance).compute_nodes(segments)
                    }
                };
                result.map(to_multi_line_string).map_err(|fallback| NodingError::Unrecoverable {
                    primary: primary_err,
                    fallback,
                })
            }
            Err(err) => Err(NodingError::Noder(err)),
        }
    }
}

/// Nodes `geometry` with `noder`, or with the default strategy for a floating
/// precision model when `noder` is `None`.
pub fn node(geometry: &Geometry, noder: Option<Box<dyn Noder>>) -> Result<Geometry, NodingError> {
    let orchestrator = GeometryNoder::new(PrecisionModel::Floating);
    match noder {
        Some(noder) => orchestrator.with_noder(noder).node(geometry),
        None => orchestrator.node(geometry),
    }
}

/// Collects the segment strings of every line-bearing sub-geometry.
///
/// Points are ignored, empty lines are skipped, and rings are closed if their
/// last coordinate does not repeat the first. A line or ring with a single
/// coordinate is malformed.
pub fn extract_segment_strings(
    geometry: &Geometry,
) -> Result<Vec<SegmentString>, MalformedGeometryError> {
    let mut out = Vec::new();
    for (index, line) in geometry.lines().into_iter().enumerate() {
        let Some((&first, rest)) = line.coords.split_first() else {
            continue;
        };
        if rest.is_empty() {
            return Err(MalformedGeometryError { kind: line.kind.name(), index });
        }
        let mut coords = line.coords.to_vec();
        if line.kind == LineKind::Ring && !rest.last().is_some_and(|last| last.equals_2d(&first)) {
            coords.push(first);
        }
        out.push(SegmentString::new(coords));
    }
    Ok(out)
}

/// Collects noded strings into a `MultiLineString`, keeping only the first of
/// any strings that cover the same planar path in either direction.
fn to_multi_line_string(noded: Vec<SegmentString>) -> Geometry {
    let mut seen: BTreeSet<Vec<PlanarKey>> = BTreeSet::new();
    let total = noded.len();
    let lines: Vec<LineString> = noded
        .into_iter()
        .filter(|s| seen.insert(oriented_key(s)))
        .map(|s| LineString(s.into_coords()))
        .collect();
    if lines.len() < total {
        debug!(dropped = total - lines.len(), "dropped duplicate noded edges");
    }
    Geometry::MultiLineString(lines)
}

/// Planar path of `s`, normalized so that a string and its reverse agree.
fn oriented_key(s: &SegmentString) -> Vec<PlanarKey> {
    let forward: Vec<PlanarKey> = s.coords().iter().map(|c| c.planar_key()).collect();
    let reversed: Vec<PlanarKey> = forward.iter().rev().copied().collect();
    forward.min(reversed)
}

fn magnitude(segments: &[SegmentString]) -> f64 {
    segments
        .iter()
        .flat_map(SegmentString::coords)
        .filter(|c| c.is_finite())
        .fold(0.0, |acc: f64, c| acc.max(c.x.abs()).max(c.y.abs()))
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use rstar::primitives::GeomWithData;
use rstar::RTree;
use tracing::trace;

use super::index::{candidate_pairs, distance_to_segment, intersection_points, is_trivial};
use super::segment_string::{SegmentNodes, SegmentString};
use super::{ensure_finite, Noder};
use crate::coord::Coordinate;
use crate::error::NoderError;

/// Tolerance-based noder, robust against near-coincident vertices.
///
/// Every vertex is snapped to the first previously seen vertex within
/// `tolerance`; vertices that come within `tolerance` of another segment's
/// interior become split points of that segment; crossings are snapped the
/// same way before splitting. Runs a single pass and never reports a
/// robustness failure for finite input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappingNoder {
    tolerance: f64,
}

impl SnappingNoder {
    /// Creates a noder with the given snap distance.
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Noder for SnappingNoder {
    fn compute_nodes(
        &self,
        segments: Vec<SegmentString>,
    ) -> Result<Vec<SegmentString>, NoderError> {
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(NoderError::InvalidInput(format!(
                "snap tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        ensure_finite(&segments)?;

        let mut index = SnapIndex::new(self.tolerance);
        let strings: Vec<SegmentString> = segments
            .into_iter()
            .map(|s| {
                let coords = s.into_coords().into_iter().map(|c| index.snap(c)).collect();
                SegmentString::new(coords).without_repeats()
            })
            .filter(|s| s.num_segments() > 0)
            .collect();

        let mut nodes: Vec<SegmentNodes<'_>> = strings.iter().map(SegmentNodes::new).collect();
        for (a, b) in candidate_pairs(&strings, self.tolerance) {
            let p = strings[a.string].segment(a.segment);
            let q = strings[b.string].segment(b.segment);

            for (vertex, target, seg) in [(q.0, a, p), (q.1, a, p), (p.0, b, q), (p.1, b, q)] {
                let near = !vertex.equals_2d(&seg.0)
                    && !vertex.equals_2d(&seg.1)
                    && distance_to_segment(&vertex, &seg.0, &seg.1) <= self.tolerance;
                if near && !is_trivial(&strings, a, b, &vertex) {
                    nodes[target.string].add(target.segment, vertex);
                }
            }

            for point in intersection_points(p, q) {
                let point = index.snap(point);
                if is_trivial(&strings, a, b, &point) {
                    continue;
                }
                nodes[a.string].add(a.segment, point);
                nodes[b.string].add(b.segment, point);
            }
        }
        let noded: Vec<SegmentString> = nodes.into_iter().flat_map(SegmentNodes::split).collect();
        trace!(tolerance = self.tolerance, strings = noded.len(), "snapping noding pass");
        Ok(noded)
    }
}

/// Vertices seen so far; the earliest one within tolerance wins.
struct SnapIndex {
    tolerance: f64,
    tree: RTree<GeomWithData<[f64; 2], (usize, Coordinate)>>,
    inserted: usize,
}

impl SnapIndex {
    fn new(tolerance: f64) -> Self {
        Self { tolerance, tree: RTree::new(), inserted: 0 }
    }

    fn snap(&mut self, c: Coordinate) -> Coordinate {
        let within = self
            .tree
            .locate_within_distance([c.x, c.y], self.tolerance * self.tolerance)
            .min_by_key(|entry| entry.data.0);
        if let Some(entry) = within {
            return entry.data.1;
        }
        self.tree.insert(GeomWithData::new([c.x, c.y], (self.inserted, c)));
        self.inserted += 1;
        c
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::trace;

use super::index::{candidate_pairs, intersection_points, is_trivial};
use super::segment_string::{SegmentNodes, SegmentString};
use super::{ensure_finite, Noder};
use crate::error::NoderError;
use crate::precision::PrecisionModel;

/// Noding passes attempted before reporting a robustness failure.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Exact noder that repeats full noding passes until no new interior nodes
/// appear.
///
/// Intersection points are rounded with the precision model. Rounding can move
/// a split point off its segments and create fresh crossings, so a pass may
/// need to run again. Failing to converge within `max_iterations` passes is a
/// [`NoderError::Robustness`] failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IteratedNoder {
    precision: PrecisionModel,
    max_iterations: usize,
}

impl IteratedNoder {
    /// Creates a noder that rounds intersections with `precision`.
    #[must_use]
    pub const fn new(precision: PrecisionModel) -> Self {
        Self { precision, max_iterations: DEFAULT_MAX_ITERATIONS }
    }

    /// Overrides the pass limit (at least one pass always runs).
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = if max_iterations == 0 { 1 } else { max_iterations };
        self
    }

    /// One pass: find every non-trivial intersection, split, and report how
    /// many interior nodes were created.
    fn node_once(&self, strings: &[SegmentString]) -> (Vec<SegmentString>, usize) {
        let mut nodes: Vec<SegmentNodes<'_>> = strings.iter().map(SegmentNodes::new).collect();
        let mut created = 0;
        for (a, b) in candidate_pairs(strings, 0.0) {
            let p = strings[a.string].segment(a.segment);
            let q = strings[b.string].segment(b.segment);
            for point in intersection_points(p, q) {
                let point = self.precision.make_precise_coord(point);
                if is_trivial(strings, a, b, &point) {
                    continue;
                }
                created += usize::from(nodes[a.string].add(a.segment, point));
                created += usize::from(nodes[b.string].add(b.segment, point));
            }
        }
        (nodes.into_iter().flat_map(SegmentNodes::split).collect(), created)
    }
}

impl Default for IteratedNoder {
    fn default() -> Self {
        Self::new(PrecisionModel::Floating)
    }
}

impl Noder for IteratedNoder {
    fn compute_nodes(
        &self,
        segments: Vec<SegmentString>,
    ) -> Result<Vec<SegmentString>, NoderError> {
        ensure_finite(&segments)?;
        let mut current: Vec<SegmentString> = segments
            .into_iter()
            .map(SegmentString::without_repeats)
            .filter(|s| s.num_segments() > 0)
            .collect();
        for iteration in 1..=self.max_iterations {
            let (noded, created) = self.node_once(&current);
            trace!(iteration, created, strings = noded.len(), "iterated noding pass");
            current = noded;
            if created == 0 {
                return Ok(current);
            }
        }
        Err(NoderError::Robustness(format!(
            "iterated noding did not converge after {} passes",
            self.max_iterations
        )))
    }
}

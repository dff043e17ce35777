// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared segment machinery: candidate pair search and pairwise intersection.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::Line;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::RTree;

use super::segment_string::SegmentString;
use crate::coord::Coordinate;

/// Position of one segment: `(string index, segment index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct SegmentRef {
    pub(crate) string: usize,
    pub(crate) segment: usize,
}

type IndexedSegment = GeomWithData<Rectangle<[f64; 2]>, SegmentRef>;

/// Every pair of segments whose envelopes, grown by `expand`, intersect.
///
/// Each unordered pair appears once as `(a, b)` with `a < b`; the list is
/// sorted so passes are deterministic.
pub(crate) fn candidate_pairs(
    strings: &[SegmentString],
    expand: f64,
) -> Vec<(SegmentRef, SegmentRef)> {
    // Growing both boxes by half the distance is the same as growing one by all of it.
    let half = expand / 2.0;
    let entries: Vec<IndexedSegment> = strings
        .iter()
        .enumerate()
        .flat_map(|(string, s)| {
            (0..s.num_segments()).map(move |segment| {
                let (p0, p1) = s.segment(segment);
                GeomWithData::new(
                    Rectangle::from_corners(
                        [p0.x.min(p1.x) - half, p0.y.min(p1.y) - half],
                        [p0.x.max(p1.x) + half, p0.y.max(p1.y) + half],
                    ),
                    SegmentRef { string, segment },
                )
            })
        })
        .collect();
    let tree = RTree::bulk_load(entries);

    let mut pairs: Vec<(SegmentRef, SegmentRef)> = tree
        .intersection_candidates_with_other_tree(&tree)
        .filter(|(a, b)| a.data < b.data)
        .map(|(a, b)| (a.data, b.data))
        .collect();
    pairs.sort_unstable();
    pairs.dedup();
    pairs
}

/// Intersection points of two segments: none, one, or the two ends of a
/// collinear overlap.
pub(crate) fn intersection_points(
    p: (Coordinate, Coordinate),
    q: (Coordinate, Coordinate),
) -> Vec<Coordinate> {
    match line_intersection(Line::new(p.0.xy(), p.1.xy()), Line::new(q.0.xy(), q.1.xy())) {
        None => Vec::new(),
        Some(LineIntersection::SinglePoint { intersection, .. }) => vec![intersection.into()],
        Some(LineIntersection::Collinear { intersection }) => {
            vec![intersection.start.into(), intersection.end.into()]
        }
    }
}

/// `true` if `at` is only the shared vertex of two consecutive segments of the
/// same string (including the closing vertex of a ring).
pub(crate) fn is_trivial(
    strings: &[SegmentString],
    a: SegmentRef,
    b: SegmentRef,
    at: &Coordinate,
) -> bool {
    if a.string != b.string {
        return false;
    }
    let s = &strings[a.string];
    let (lo, hi) = (a.segment.min(b.segment), a.segment.max(b.segment));
    if hi == lo + 1 {
        return at.equals_2d(&s.coords()[hi]);
    }
    s.is_closed() && lo == 0 && hi + 1 == s.num_segments() && at.equals_2d(&s.coords()[0])
}

/// Distance from `p` to the closed segment `(a, b)`.
pub(crate) fn distance_to_segment(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance_2d(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    (p.x - (a.x + t * dx)).hypot(p.y - (a.y + t * dy))
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::coord::Coordinate;

/// A coordinate sequence handed to and returned from a [`Noder`](super::Noder).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentString {
    coords: Vec<Coordinate>,
}

impl SegmentString {
    /// Wraps `coords` without validation.
    #[must_use]
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }

    /// Coordinates in order.
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of segments (`coords - 1`, saturating).
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Endpoints of segment `i`.
    ///
    /// # Panics
    /// Panics if `i >= num_segments()`.
    #[must_use]
    pub fn segment(&self, i: usize) -> (Coordinate, Coordinate) {
        (self.coords[i], self.coords[i + 1])
    }

    /// `true` when the first and last coordinates share a planar position.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.coords.len() > 2
            && self.coords.first().zip(self.coords.last()).is_some_and(|(a, b)| a.equals_2d(b))
    }

    /// Drops consecutive planar repeats; the first of each run survives.
    #[must_use]
    pub fn without_repeats(self) -> Self {
        let mut coords: Vec<Coordinate> = Vec::with_capacity(self.coords.len());
        for c in self.coords {
            push_distinct(&mut coords, c);
        }
        Self { coords }
    }

    /// Consumes the string, returning its coordinates.
    #[must_use]
    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }
}

impl From<Vec<Coordinate>> for SegmentString {
    fn from(coords: Vec<Coordinate>) -> Self {
        Self::new(coords)
    }
}

fn push_distinct(coords: &mut Vec<Coordinate>, c: Coordinate) {
    if coords.last().is_none_or(|last| !last.equals_2d(&c)) {
        coords.push(c);
    }
}

/// A node strictly inside one segment, keyed by squared distance from the
/// segment start.
#[derive(Debug, Clone, Copy)]
struct InteriorNode {
    dist2: f64,
    coord: Coordinate,
}

/// Split points collected for one segment string during a noding pass.
pub(crate) struct SegmentNodes<'a> {
    string: &'a SegmentString,
    /// `vertex[i]` marks coordinate `i` as a split point.
    vertex: Vec<bool>,
    /// Interior split points per segment, unsorted.
    interior: Vec<Vec<InteriorNode>>,
}

impl<'a> SegmentNodes<'a> {
    pub(crate) fn new(string: &'a SegmentString) -> Self {
        let n = string.coords().len();
        let mut vertex = vec![false; n];
        if let Some(first) = vertex.first_mut() {
            *first = true;
        }
        if let Some(last) = vertex.last_mut() {
            *last = true;
        }
        Self { string, vertex, interior: vec![Vec::new(); string.num_segments()] }
    }

    /// Records `coord` as a split point of segment `segment`.
    ///
    /// Returns `true` only when a new interior node was created. A node that
    /// coincides with a segment endpoint marks that vertex instead. Interior
    /// nodes without elevation inherit one interpolated along the segment.
    pub(crate) fn add(&mut self, segment: usize, coord: Coordinate) -> bool {
        let (p0, p1) = self.string.segment(segment);
        if coord.equals_2d(&p0) {
            self.vertex[segment] = true;
            return false;
        }
        if coord.equals_2d(&p1) {
            self.vertex[segment + 1] = true;
            return false;
        }
        let nodes = &mut self.interior[segment];
        if nodes.iter().any(|n| n.coord.equals_2d(&coord)) {
            return false;
        }
        let dx = coord.x - p0.x;
        let dy = coord.y - p0.y;
        let coord = Coordinate { z: coord.z.or_else(|| interpolate_z(p0, p1, coord)), ..coord };
        nodes.push(InteriorNode { dist2: dx * dx + dy * dy, coord });
        true
    }

    /// Splits the string at every recorded node.
    ///
    /// Pieces that collapse to a single planar position are dropped.
    pub(crate) fn split(mut self) -> Vec<SegmentString> {
        let coords = self.string.coords();
        let Some(&first) = coords.first() else {
            return Vec::new();
        };
        let last_index = coords.len() - 1;
        let mut out = Vec::new();
        let mut current = vec![first];
        for i in 0..last_index {
            let mut interior = std::mem::take(&mut self.interior[i]);
            interior.sort_by(|a, b| a.dist2.total_cmp(&b.dist2));
            for node in interior {
                push_distinct(&mut current, node.coord);
                flush(&mut out, &mut current, node.coord);
            }
            let next = coords[i + 1];
            push_distinct(&mut current, next);
            if self.vertex[i + 1] && i + 1 < last_index {
                flush(&mut out, &mut current, next);
            }
        }
        if current.len() >= 2 {
            out.push(SegmentString::new(current));
        }
        out
    }
}

fn flush(out: &mut Vec<SegmentString>, current: &mut Vec<Coordinate>, start: Coordinate) {
    let done = std::mem::replace(current, vec![start]);
    if done.len() >= 2 {
        out.push(SegmentString::new(done));
    }
}

fn interpolate_z(p0: Coordinate, p1: Coordinate, at: Coordinate) -> Option<f64> {
    let (z0, z1) = (p0.z?, p1.z?);
    let length = p0.distance_2d(&p1);
    if length == 0.0 {
        return Some(z0);
    }
    let t = (p0.distance_2d(&at) / length).clamp(0.0, 1.0);
    Some(z0 + t * (z1 - z0))
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry model shared by the noder, the graph builder, and the I/O layer.
//!
//! The model is deliberately thin: it exposes sub-geometry traversal and
//! per-sub-geometry coordinate access, which is all noding and graph building
//! need.

use crate::coord::Coordinate;

/// A sequence of coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Coordinate>);

impl LineString {
    /// Coordinates in order.
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.0
    }
}

impl From<Vec<Coordinate>> for LineString {
    fn from(coords: Vec<Coordinate>) -> Self {
        Self(coords)
    }
}

/// A polygon: one exterior ring and zero or more holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Outer boundary. Empty for `POLYGON EMPTY`.
    pub exterior: LineString,
    /// Holes.
    pub interiors: Vec<LineString>,
}

/// Any supported geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single position, `None` when empty.
    Point(Option<Coordinate>),
    /// An open or closed line.
    LineString(LineString),
    /// A polygon with optional holes.
    Polygon(Polygon),
    /// A set of positions.
    MultiPoint(Vec<Coordinate>),
    /// A set of lines.
    MultiLineString(Vec<LineString>),
    /// A set of polygons.
    MultiPolygon(Vec<Polygon>),
    /// A heterogeneous collection.
    GeometryCollection(Vec<Geometry>),
}

/// Whether a coordinate sequence is a free line or a polygon ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A line string.
    Line,
    /// A polygon ring; implicitly closed.
    Ring,
}

impl LineKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "LineString",
            Self::Ring => "LinearRing",
        }
    }
}

/// A borrowed line-bearing sub-geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRef<'a> {
    /// Line or ring.
    pub kind: LineKind,
    /// Its coordinates, as stored.
    pub coords: &'a [Coordinate],
}

impl Geometry {
    /// WKT-style type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::MultiLineString(_) => "MultiLineString",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// `true` if the geometry holds no coordinates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates().is_empty()
    }

    /// Line-bearing sub-geometries in natural traversal order.
    ///
    /// Points contribute nothing. Polygons yield their exterior ring followed by
    /// their holes. Collections are flattened depth-first.
    #[must_use]
    pub fn lines(&self) -> Vec<LineRef<'_>> {
        let mut out = Vec::new();
        self.collect_lines(&mut out);
        out
    }

    fn collect_lines<'a>(&'a self, out: &mut Vec<LineRef<'a>>) {
        match self {
            Self::Point(_) | Self::MultiPoint(_) => {}
            Self::LineString(line) => out.push(LineRef { kind: LineKind::Line, coords: line.coords() }),
            Self::Polygon(polygon) => push_rings(polygon, out),
            Self::MultiLineString(lines) => out.extend(
                lines.iter().map(|line| LineRef { kind: LineKind::Line, coords: line.coords() }),
            ),
            Self::MultiPolygon(polygons) => {
                for polygon in polygons {
                    push_rings(polygon, out);
                }
            }
            Self::GeometryCollection(members) => {
                for member in members {
                    member.collect_lines(out);
                }
            }
        }
    }

    /// Every coordinate in traversal order, points included.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut out = Vec::new();
        self.collect_coordinates(&mut out);
        out
    }

    fn collect_coordinates(&self, out: &mut Vec<Coordinate>) {
        match self {
            Self::Point(point) => out.extend(point.iter().copied()),
            Self::MultiPoint(points) => out.extend_from_slice(points),
            Self::GeometryCollection(members) => {
                for member in members {
                    member.collect_coordinates(out);
                }
            }
            _ => {
                for line in self.lines() {
                    out.extend_from_slice(line.coords);
                }
            }
        }
    }
}

fn push_rings<'a>(polygon: &'a Polygon, out: &mut Vec<LineRef<'a>>) {
    out.push(LineRef { kind: LineKind::Ring, coords: polygon.exterior.coords() });
    out.extend(
        polygon
            .interiors
            .iter()
            .map(|ring| LineRef { kind: LineKind::Ring, coords: ring.coords() }),
    );
}

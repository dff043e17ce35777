// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! WKT input and output.
//!
//! Parsing is delegated to the `wkt` crate and converted into the core
//! [`Geometry`] model. Writing is done here so that ordinates keep their
//! shortest round-trip representation (`2` rather than `2.0`).

use std::io::BufRead;
use std::str::FromStr;

use geom2graph_core::{Coordinate, Geometry, LineString, Polygon};
use tracing::trace;
use wkt::Wkt;

use crate::error::ReadError;

/// Parses a single WKT geometry.
///
/// Leading and trailing whitespace is ignored. Errors report line 1.
pub fn read_wkt(text: &str) -> Result<Geometry, ReadError> {
    parse_line(text, 1)
}

fn parse_line(text: &str, line: usize) -> Result<Geometry, ReadError> {
    let parsed = Wkt::<f64>::from_str(text.trim())
        .map_err(|e| ReadError::Wkt { line, message: e.to_string() })?;
    Ok(convert(parsed))
}

/// Streams geometries from text with one WKT geometry per line.
///
/// Blank lines are skipped. Iteration yields the first error it meets and may
/// be resumed afterwards; line numbers stay accurate across errors.
pub struct WktReader<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> WktReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0, buf: String::new() }
    }
}

impl<R: BufRead> Iterator for WktReader<R> {
    type Item = Result<Geometry, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(err) => return Some(Err(ReadError::Io(err))),
            }
            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }
            trace!(line = self.line, "parsing WKT");
            return Some(parse_line(text, self.line));
        }
    }
}

fn coord(c: &wkt::types::Coord<f64>) -> Coordinate {
    Coordinate { x: c.x, y: c.y, z: c.z, m: c.m }
}

fn line_string(l: wkt::types::LineString<f64>) -> LineString {
    LineString(l.0.iter().map(coord).collect())
}

fn polygon(p: wkt::types::Polygon<f64>) -> Polygon {
    let mut rings = p.0.into_iter().map(line_string);
    let exterior = rings.next().unwrap_or_default();
    Polygon { exterior, interiors: rings.collect() }
}

fn convert(w: Wkt<f64>) -> Geometry {
    match w {
        Wkt::Point(p) => Geometry::Point(p.0.as_ref().map(coord)),
        Wkt::LineString(l) => Geometry::LineString(line_string(l)),
        Wkt::Polygon(p) => Geometry::Polygon(polygon(p)),
        Wkt::MultiPoint(mp) => {
            Geometry::MultiPoint(mp.0.iter().filter_map(|p| p.0.as_ref().map(coord)).collect())
        }
        Wkt::MultiLineString(ml) => {
            Geometry::MultiLineString(ml.0.into_iter().map(line_string).collect())
        }
        Wkt::MultiPolygon(mp) => Geometry::MultiPolygon(mp.0.into_iter().map(polygon).collect()),
        Wkt::GeometryCollection(gc) => {
            Geometry::GeometryCollection(gc.0.into_iter().map(convert).collect())
        }
    }
}

/// Formats `geometry` as WKT.
///
/// The `Z`/`M`/`ZM` tag is emitted when every coordinate of the geometry
/// carries that ordinate.
#[must_use]
pub fn write_wkt(geometry: &Geometry) -> String {
    let mut out = String::new();
    write_geometry(&mut out, geometry);
    out
}

#[derive(Clone, Copy)]
struct Dims {
    z: bool,
    m: bool,
}

impl Dims {
    fn of(coords: &[Coordinate]) -> Self {
        let non_empty = !coords.is_empty();
        Self {
            z: non_empty && coords.iter().all(|c| c.z.is_some()),
            m: non_empty && coords.iter().all(|c| c.m.is_some()),
        }
    }

    fn tag(self) -> &'static str {
        match (self.z, self.m) {
            (true, true) => " ZM",
            (true, false) => " Z",
            (false, true) => " M",
            (false, false) => "",
        }
    }
}

fn write_geometry(out: &mut String, geometry: &Geometry) {
    let keyword = match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
    };
    out.push_str(keyword);
    if geometry.is_empty() {
        out.push_str(" EMPTY");
        return;
    }

    let dims = match geometry {
        Geometry::GeometryCollection(_) => Dims { z: false, m: false },
        other => Dims::of(&other.coordinates()),
    };
    out.push_str(dims.tag());
    out.push(' ');

    match geometry {
        Geometry::Point(p) => {
            out.push('(');
            if let Some(c) = p {
                write_coord(out, c, dims);
            }
            out.push(')');
        }
        Geometry::LineString(l) => write_sequence(out, l.coords(), dims),
        Geometry::Polygon(p) => write_polygon(out, p, dims),
        Geometry::MultiPoint(points) => {
            write_list(out, points, |out, c| {
                out.push('(');
                write_coord(out, c, dims);
                out.push(')');
            });
        }
        Geometry::MultiLineString(lines) => {
            write_list(out, lines, |out, l| write_sequence(out, l.coords(), dims));
        }
        Geometry::MultiPolygon(polygons) => {
            write_list(out, polygons, |out, p| write_polygon(out, p, dims));
        }
        Geometry::GeometryCollection(members) => write_list(out, members, write_geometry),
    }
}

fn write_list<T>(out: &mut String, items: &[T], mut item: impl FnMut(&mut String, &T)) {
    out.push('(');
    for (i, value) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item(out, value);
    }
    out.push(')');
}

fn write_polygon(out: &mut String, polygon: &Polygon, dims: Dims) {
    let rings: Vec<&LineString> =
        std::iter::once(&polygon.exterior).chain(&polygon.interiors).collect();
    write_list(out, &rings, |out, ring| write_sequence(out, ring.coords(), dims));
}

fn write_sequence(out: &mut String, coords: &[Coordinate], dims: Dims) {
    write_list(out, coords, |out, c| write_coord(out, c, dims));
}

fn write_coord(out: &mut String, c: &Coordinate, dims: Dims) {
    let z = dims.z.then(|| c.z.unwrap_or_default());
    let m = dims.m.then(|| c.m.unwrap_or_default());
    let ordinates: Vec<String> =
        [Some(c.x), Some(c.y), z, m].into_iter().flatten().map(|v| v.to_string()).collect();
    out.push_str(&ordinates.join(" "));
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code, missing_docs)]
//! Shared builders for geom2graph-core integration tests.

use std::collections::BTreeSet;

use geom2graph_core::{Coordinate, Geometry, LineString};

pub fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

pub fn line(points: &[(f64, f64)]) -> LineString {
    LineString(points.iter().map(|&(x, y)| c(x, y)).collect())
}

pub fn line_geometry(points: &[(f64, f64)]) -> Geometry {
    Geometry::LineString(line(points))
}

pub fn collection_of_lines(lines: &[&[(f64, f64)]]) -> Geometry {
    Geometry::GeometryCollection(lines.iter().map(|points| line_geometry(points)).collect())
}

type GridPoint = (i64, i64);

fn grid(coord: &Coordinate) -> GridPoint {
    #[allow(clippy::cast_possible_truncation)]
    let snap = |v: f64| (v * 1e9).round() as i64;
    (snap(coord.x), snap(coord.y))
}

/// Unit segments of every line, direction-normalized and snapped to a 1e-9
/// grid. Two noded geometries are topologically equal when these sets match.
pub fn segment_set(geometry: &Geometry) -> BTreeSet<(GridPoint, GridPoint)> {
    geometry
        .lines()
        .iter()
        .flat_map(|line| line.coords.windows(2))
        .map(|pair| {
            let (a, b) = (grid(&pair[0]), grid(&pair[1]));
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .filter(|(a, b)| a != b)
        .collect()
}

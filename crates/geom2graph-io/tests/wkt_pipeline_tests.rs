// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! WKT in, graph out: the noding and graph scenarios expressed as text.

use geom2graph_core::{node, Coordinate, Geometry, GeometryGraph, SnappingNoder};
use geom2graph_io::{read_tgf, read_wkt, write_tgf, write_wkt, ReadError, WktReader};

fn graph_of(wkt: &str) -> GeometryGraph {
    GeometryGraph::build(&read_wkt(wkt).unwrap())
}

#[test]
fn linestring_z_keeps_elevation_in_tgf() {
    let graph = graph_of("LINESTRING Z (0 0 0, 1 1 1, 2 2 2)");
    let mut out = Vec::new();
    write_tgf(&graph, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0\tPOINT Z (0 0 0)\n1\tPOINT Z (1 1 1)\n2\tPOINT Z (2 2 2)\n#\n0\t1\n1\t2\n"
    );
}

#[test]
fn closed_polygon_is_a_triangle() {
    let graph = graph_of("POLYGON ((0 0, 1 1, 2 2, 0 0))");
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn multilinestring_with_shared_vertex() {
    let graph = graph_of("MULTILINESTRING ((0 0, 1 0, 2 0), (1 0, 2 0.00001, 3 3))");
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.nodes()[3].coord, Coordinate::new(2.0, 0.00001));
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (1, 3), (3, 4)]);
}

#[test]
fn rectangle_noded_from_wkt() {
    let input = read_wkt(
        "GEOMETRYCOLLECTION (LINESTRING (2 0, 2 8), LINESTRING (6 0, 6 8), \
         LINESTRING (0 2, 8 2), LINESTRING (0 6, 8 6))",
    )
    .unwrap();
    let graph = GeometryGraph::build(&node(&input, None).unwrap());
    assert_eq!(graph.len(), 12);
    assert_eq!(graph.edge_count(), 12);
}

#[test]
fn disjoint_point_does_not_split_line() {
    let input =
        read_wkt("GEOMETRYCOLLECTION (LINESTRING (0 0, 2 2), POINT (1 1), POINT (0 1))").unwrap();
    let noded = node(&input, None).unwrap();
    assert_eq!(write_wkt(&noded), "MULTILINESTRING ((0 0, 2 2))");
}

#[test]
fn snapping_noder_from_wkt() {
    let input =
        read_wkt("GEOMETRYCOLLECTION (LINESTRING (0 1, 0 2), LINESTRING (0 2.001, 0 3))").unwrap();
    let noded = node(&input, Some(Box::new(SnappingNoder::new(0.01)))).unwrap();
    assert_eq!(write_wkt(&noded), "MULTILINESTRING ((0 1, 0 2), (0 2, 0 3))");
}

#[test]
fn tgf_round_trips_a_noded_graph() {
    let input = read_wkt("MULTILINESTRING ((0 0, 4 4), (0 4, 4 0))").unwrap();
    let graph = GeometryGraph::build(&node(&input, None).unwrap());
    let mut out = Vec::new();
    write_tgf(&graph, &mut out).unwrap();
    let back = read_tgf(out.as_slice()).unwrap();
    assert_eq!(back, graph);
}

#[test]
fn graph_back_to_geometry() {
    let graph = graph_of("LINESTRING (0 0, 1 0, 1 1)");
    assert_eq!(
        write_wkt(&graph.to_geometry()),
        "GEOMETRYCOLLECTION (LINESTRING (0 0, 1 0), LINESTRING (1 0, 1 1))"
    );
}

#[test]
fn reader_combines_lines_into_one_collection() {
    let text = "LINESTRING (0 0, 2 2)\n\nLINESTRING (0 2, 2 0)\n";
    let members: Vec<Geometry> = WktReader::new(text.as_bytes()).collect::<Result<_, _>>().unwrap();
    assert_eq!(members.len(), 2);
    let noded = node(&Geometry::GeometryCollection(members), None).unwrap();
    let graph = GeometryGraph::build(&noded);
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn invalid_wkt_is_reported_with_line() {
    let text = "POINT (0 0)\nLINESTRING (0 0,\n";
    let err = WktReader::new(text.as_bytes()).collect::<Result<Vec<_>, _>>().unwrap_err();
    assert!(matches!(err, ReadError::Wkt { line: 2, .. }), "{err}");
}

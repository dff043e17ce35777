// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Graph building: discovery-order ids, planar dedupe, symmetric adjacency.

mod common;

use std::collections::BTreeSet;

use common::{c, collection_of_lines, line, line_geometry};
use geom2graph_core::{Coordinate, Geometry, GeometryGraph, LineString, Polygon};

fn adjacency(graph: &GeometryGraph, id: usize) -> BTreeSet<usize> {
    graph.node(id).map(|n| n.adjacencies.clone()).unwrap_or_default()
}

fn set(ids: &[usize]) -> BTreeSet<usize> {
    ids.iter().copied().collect()
}

#[test]
fn single_linestring() {
    let geometry = line_geometry(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    let coords = geometry.coordinates();
    let graph = GeometryGraph::build(&geometry);

    assert_eq!(graph.len(), 3);
    // Ids follow order of discovery.
    for (id, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id, id);
        assert_eq!(node.coord, coords[id]);
    }
    assert_eq!(adjacency(&graph, 0), set(&[1]));
    assert_eq!(adjacency(&graph, 1), set(&[0, 2]));
    assert_eq!(adjacency(&graph, 2), set(&[1]));
}

#[test]
fn single_3d_linestring_keeps_elevation() {
    let geometry = Geometry::LineString(LineString(vec![
        Coordinate::new_z(0.0, 0.0, 0.0),
        Coordinate::new_z(1.0, 1.0, 1.0),
        Coordinate::new_z(2.0, 2.0, 2.0),
    ]));
    let coords = geometry.coordinates();
    let graph = GeometryGraph::build(&geometry);

    assert_eq!(graph.len(), 3);
    for (node, expected) in graph.nodes().iter().zip(&coords) {
        assert_eq!(&node.coord, expected);
        assert!(node.coord.z.is_some());
    }
    assert_eq!(adjacency(&graph, 1), set(&[0, 2]));
}

#[test]
fn closed_polygon() {
    let geometry = Geometry::Polygon(Polygon {
        exterior: line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)]),
        interiors: Vec::new(),
    });
    let coords = geometry.coordinates();
    let graph = GeometryGraph::build(&geometry);

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.nodes()[0].coord, coords[0]);
    assert_eq!(graph.nodes()[1].coord, coords[1]);
    assert_eq!(graph.nodes()[2].coord, coords[2]);
    assert_eq!(adjacency(&graph, 0), set(&[1, 2]));
    assert_eq!(adjacency(&graph, 1), set(&[0, 2]));
    assert_eq!(adjacency(&graph, 2), set(&[0, 1]));
}

#[test]
fn disjoint_multilinestring() {
    let geometry = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
        line(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]),
    ]);
    let coords = geometry.coordinates();
    assert_eq!(coords.len(), 6);
    let graph = GeometryGraph::build(&geometry);

    assert_eq!(graph.len(), 6);
    for (id, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.coord, coords[id]);
    }
    assert_eq!(adjacency(&graph, 0), set(&[1]));
    assert_eq!(adjacency(&graph, 1), set(&[0, 2]));
    assert_eq!(adjacency(&graph, 2), set(&[1]));
    assert_eq!(adjacency(&graph, 3), set(&[4]));
    assert_eq!(adjacency(&graph, 4), set(&[3, 5]));
    assert_eq!(adjacency(&graph, 5), set(&[4]));
}

#[test]
fn multilinestring_with_shared_vertex() {
    let geometry = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),   // 0 1 2
        line(&[(1.0, 0.0), (2.0, 0.00001), (3.0, 3.0)]), // 1 3 4
    ]);
    let coords = geometry.coordinates();
    assert_eq!(coords.len(), 6);
    let graph = GeometryGraph::build(&geometry);

    // The shared (1, 0) collapses into one node.
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.nodes()[0].coord, coords[0]);
    assert_eq!(graph.nodes()[1].coord, coords[1]);
    assert_eq!(graph.nodes()[2].coord, coords[2]);
    assert_eq!(graph.nodes()[3].coord, coords[4]); // coords[3] is the duplicate
    assert_eq!(graph.nodes()[4].coord, coords[5]);

    assert_eq!(adjacency(&graph, 0), set(&[1]));
    assert_eq!(adjacency(&graph, 1), set(&[0, 2, 3]));
    assert_eq!(adjacency(&graph, 2), set(&[1]));
    assert_eq!(adjacency(&graph, 3), set(&[1, 4]));
    assert_eq!(adjacency(&graph, 4), set(&[3]));
}

#[test]
fn lone_point_yields_empty_graph() {
    let graph = GeometryGraph::build(&Geometry::Point(Some(c(0.0, 0.0))));
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn points_only_collection_yields_empty_graph() {
    let geometry = Geometry::GeometryCollection(vec![
        Geometry::Point(Some(c(0.0, 0.0))),
        Geometry::MultiPoint(vec![c(1.0, 1.0), c(2.0, 2.0)]),
        Geometry::Point(None),
    ]);
    assert!(GeometryGraph::build(&geometry).is_empty());
}

#[test]
fn first_occurrence_payload_wins() {
    let geometry = Geometry::MultiLineString(vec![
        LineString(vec![Coordinate::new_z(0.0, 0.0, 5.0), c(1.0, 0.0)]),
        LineString(vec![c(1.0, 0.0), Coordinate::new_z(0.0, 0.0, 9.0)]),
    ]);
    let graph = GeometryGraph::build(&geometry);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.nodes()[0].coord.z, Some(5.0));
    // The second line repeats edge 0-1; adjacency is a set.
    assert_eq!(adjacency(&graph, 0), set(&[1]));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn closed_ring_with_k_distinct_coordinates() {
    let square: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
    let graph = GeometryGraph::build(&collection_of_lines(&[square]));
    assert_eq!(graph.len(), 4);
    // The closing coordinate sees both ring neighbours.
    assert_eq!(adjacency(&graph, 0), set(&[1, 3]));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn edges_are_listed_once() {
    let graph = GeometryGraph::build(&line_geometry(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
}

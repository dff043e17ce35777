// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Trivial Graph Format.
//!
//! ```text
//! 0	POINT (0 0)
//! 1	POINT (1 1)
//! #
//! 0	1
//! ```
//!
//! Node records are `id<TAB>label` where the label is a WKT point; a single
//! `#` line separates nodes from edge records `a<TAB>b`. Anything after the
//! second field of an edge record is an edge label and is ignored on read.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use geom2graph_core::{Coordinate, Geometry, GeometryGraph, NodeId};
use tracing::debug;

use crate::error::ReadError;
use crate::wkt::{read_wkt, write_wkt};

/// Writes `graph` as TGF. Each undirected edge is written once, `a < b`.
pub fn write_tgf<W: Write>(graph: &GeometryGraph, mut out: W) -> io::Result<()> {
    for node in graph.nodes() {
        writeln!(out, "{}\t{}", node.id, write_wkt(&Geometry::Point(Some(node.coord))))?;
    }
    writeln!(out, "#")?;
    for (a, b) in graph.edges() {
        writeln!(out, "{a}\t{b}")?;
    }
    out.flush()
}

/// Reads a TGF graph whose node labels are WKT points.
///
/// File ids may be any non-negative integers; they are remapped to dense ids
/// in order of appearance.
pub fn read_tgf<R: BufRead>(input: R) -> Result<GeometryGraph, ReadError> {
    let mut ids: BTreeMap<u64, NodeId> = BTreeMap::new();
    let mut coords: Vec<Coordinate> = Vec::new();
    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();
    let mut in_edges = false;

    for (index, text) in input.lines().enumerate() {
        let text = text?;
        let line = index + 1;
        let record = text.trim();
        if record.is_empty() {
            continue;
        }
        if record == "#" {
            if in_edges {
                return Err(ReadError::tgf(line, "duplicate `#` separator"));
            }
            in_edges = true;
            continue;
        }

        if in_edges {
            let mut fields = record.split_whitespace();
            let a = lookup(&ids, fields.next(), line)?;
            let b = lookup(&ids, fields.next(), line)?;
            edges.push((a, b));
        } else {
            let (id, label) = record
                .split_once(char::is_whitespace)
                .ok_or_else(|| ReadError::tgf(line, "node record has no label"))?;
            let id = parse_id(id, line)?;
            let coord = point_label(label, line)?;
            match ids.entry(id) {
                Entry::Occupied(_) => {
                    return Err(ReadError::tgf(line, format!("duplicate node id {id}")));
                }
                Entry::Vacant(slot) => {
                    slot.insert(coords.len());
                    coords.push(coord);
                }
            }
        }
    }

    debug!(nodes = coords.len(), edges = edges.len(), "read TGF graph");
    Ok(GeometryGraph::from_edges(coords, edges)?)
}

fn parse_id(field: &str, line: usize) -> Result<u64, ReadError> {
    field.parse().map_err(|_| ReadError::tgf(line, format!("invalid node id `{field}`")))
}

fn lookup(ids: &BTreeMap<u64, NodeId>, field: Option<&str>, line: usize) -> Result<NodeId, ReadError> {
    let field = field.ok_or_else(|| ReadError::tgf(line, "edge record needs two node ids"))?;
    let id = parse_id(field, line)?;
    ids.get(&id)
        .copied()
        .ok_or_else(|| ReadError::tgf(line, format!("edge references unknown node {id}")))
}

fn point_label(label: &str, line: usize) -> Result<Coordinate, ReadError> {
    match read_wkt(label) {
        Ok(Geometry::Point(Some(coord))) => Ok(coord),
        Ok(other) => Err(ReadError::tgf(
            line,
            format!("node label must be a non-empty POINT, got {}", other.type_name()),
        )),
        Err(ReadError::Wkt { message, .. }) => Err(ReadError::Wkt { line, message }),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn sparse_ids_are_remapped_in_order_of_appearance() {
        let text = "10\tPOINT (5 5)\n3\tPOINT (0 0)\n#\n3\t10 some label\n";
        let graph = read_tgf(text.as_bytes()).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.nodes()[0].coord, Coordinate::new(5.0, 5.0));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn dangling_edge_is_an_error() {
        let text = "0\tPOINT (0 0)\n#\n0\t7\n";
        let err = read_tgf(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Tgf { line: 3, .. }), "{err}");
    }

    #[test]
    fn node_label_must_be_a_point() {
        let text = "0\tLINESTRING (0 0, 1 1)\n";
        let err = read_tgf(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Tgf { line: 1, .. }), "{err}");
    }

    #[test]
    fn bad_label_reports_its_line() {
        let text = "0\tPOINT (0 0)\n\n1\tPOINT (oops)\n";
        let err = read_tgf(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Wkt { line: 3, .. }), "{err}");
    }
}

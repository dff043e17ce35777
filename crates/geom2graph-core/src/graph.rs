// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deduplicated vertex/adjacency graph of a line geometry.
//!
//! Invariants:
//! - Node ids are `0..n` and equal the node's position in [`GeometryGraph::nodes`].
//! - Ids are handed out in order of first discovery during one left-to-right,
//!   sub-geometry-by-sub-geometry walk.
//! - Coordinates with equal planar projections share one node; the payload of
//!   the first occurrence wins.
//! - Adjacency is symmetric and never contains the node itself.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::coord::{Coordinate, PlanarKey};
use crate::error::GraphError;
use crate::geometry::{Geometry, LineString};

/// Dense node identifier.
pub type NodeId = usize;

/// A unique planar vertex and its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Position in the node list.
    pub id: NodeId,
    /// Coordinate of the first occurrence.
    pub coord: Coordinate,
    /// Ids of the nodes joined to this one by a segment.
    pub adjacencies: BTreeSet<NodeId>,
}

/// Vertex list plus adjacency, built once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeometryGraph {
    nodes: Vec<GraphNode>,
}

impl GeometryGraph {
    /// Builds the graph of every line-bearing sub-geometry of `geometry`.
    ///
    /// Sequences with fewer than two coordinates are skipped, so a geometry made
    /// only of points yields an empty graph.
    #[must_use]
    pub fn build(geometry: &Geometry) -> Self {
        let mut builder = GraphBuilder::default();
        for line in geometry.lines() {
            builder.add_line(line.coords);
        }
        let graph = builder.finish();
        debug!(nodes = graph.len(), edges = graph.edge_count(), "built geometry graph");
        graph
    }

    /// Assembles a graph from node coordinates (indexed by id) and undirected
    /// edges. Self-loops are dropped; duplicate edges collapse.
    pub fn from_edges<I>(coords: Vec<Coordinate>, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut nodes: Vec<GraphNode> = coords
            .into_iter()
            .enumerate()
            .map(|(id, coord)| GraphNode { id, coord, adjacencies: BTreeSet::new() })
            .collect();
        for (a, b) in edges {
            if a >= nodes.len() {
                return Err(GraphError::UnknownNeighbor { node: b, neighbor: a });
            }
            if b >= nodes.len() {
                return Err(GraphError::UnknownNeighbor { node: a, neighbor: b });
            }
            if a != b {
                nodes[a].adjacencies.insert(b);
                nodes[b].adjacencies.insert(a);
            }
        }
        Ok(Self { nodes })
    }

    /// Nodes ordered by id.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Undirected edges, each once as `(a, b)` with `a < b`, ordered by `(a, b)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().flat_map(|node| {
            node.adjacencies.range(node.id + 1..).map(move |&other| (node.id, other))
        })
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Geometry view: one two-point line per edge, then a point per isolated
    /// node.
    #[must_use]
    pub fn to_geometry(&self) -> Geometry {
        let lines = self.edges().map(|(a, b)| {
            Geometry::LineString(LineString(vec![self.nodes[a].coord, self.nodes[b].coord]))
        });
        let isolated = self
            .nodes
            .iter()
            .filter(|node| node.adjacencies.is_empty())
            .map(|node| Geometry::Point(Some(node.coord)));
        Geometry::GeometryCollection(lines.chain(isolated).collect())
    }
}

/// Per-call construction state. The lookup never outlives the build.
#[derive(Default)]
struct GraphBuilder {
    lookup: BTreeMap<PlanarKey, NodeId>,
    nodes: Vec<GraphNode>,
}

impl GraphBuilder {
    fn add_line(&mut self, coords: &[Coordinate]) {
        for pair in coords.windows(2) {
            let a = self.resolve(pair[0]);
            let b = self.resolve(pair[1]);
            self.connect(a, b);
        }
    }

    fn resolve(&mut self, coord: Coordinate) -> NodeId {
        match self.lookup.entry(coord.planar_key()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.nodes.len();
                entry.insert(id);
                self.nodes.push(GraphNode { id, coord, adjacencies: BTreeSet::new() });
                id
            }
        }
    }

    fn connect(&mut self, a: NodeId, b: NodeId) {
        // Consecutive repeats resolve to the same node; no self-loop.
        if a == b {
            return;
        }
        self.nodes[a].adjacencies.insert(b);
        self.nodes[b].adjacencies.insert(a);
    }

    fn finish(self) -> GeometryGraph {
        GeometryGraph { nodes: self.nodes }
    }
}

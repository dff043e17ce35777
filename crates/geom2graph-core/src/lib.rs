// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry noding and planar graph construction.

This crate provides:
- A small geometry model (`Geometry`, `Coordinate`) that carries `z`/`m` as
  opaque payload on a planar `(x, y)` key.
- Precision models (`PrecisionModel`) used to round intersections and to derive
  snapping tolerances.
- Noding (`noding`): a pluggable `Noder` trait, an exact `IteratedNoder`, a
  tolerance-based `SnappingNoder`, and the `GeometryNoder` orchestrator that
  falls back from the former to the latter on robustness failures.
- Graph building (`GeometryGraph`): deduplicates planar coordinates into nodes
  numbered in discovery order and records symmetric adjacency.

Design notes:
- Every operation is a pure function of its inputs; lookup tables, id counters
  and spatial indexes are scoped to one call.
- Library code never prints. Diagnostic events go through `tracing`.
"]

/// Coordinates and their planar lookup key.
pub mod coord;
/// Error types shared by the noding and graph layers.
pub mod error;
/// Geometry model consumed by the noder and the graph builder.
pub mod geometry;
/// Deduplicated vertex/adjacency graph built from line geometries.
pub mod graph;
/// Segment noding: strategies and the orchestrator.
pub mod noding;
/// Numeric precision models.
pub mod precision;

pub use coord::{Coordinate, PlanarKey};
pub use error::{GraphError, MalformedGeometryError, NoderError, NodingError};
pub use geometry::{Geometry, LineKind, LineRef, LineString, Polygon};
pub use graph::{GeometryGraph, GraphNode, NodeId};
pub use noding::{
    node, GeometryNoder, IteratedNoder, Noder, SegmentString, SnappingNoder,
};
pub use precision::PrecisionModel;

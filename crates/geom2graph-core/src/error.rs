// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for noding and graph assembly.

use thiserror::Error;

use crate::graph::NodeId;

/// A line-bearing sub-geometry that cannot describe a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} #{index} has a single coordinate; at least 2 are required")]
pub struct MalformedGeometryError {
    /// `LineString` or `LinearRing`.
    pub kind: &'static str,
    /// Position of the sub-geometry in traversal order.
    pub index: usize,
}

/// Failure reported by a [`Noder`](crate::noding::Noder) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoderError {
    /// Numerical degeneracy; a more robust strategy may still succeed.
    #[error("robustness failure: {0}")]
    Robustness(String),
    /// The input cannot be noded by any strategy.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Error returned by [`GeometryNoder::node`](crate::noding::GeometryNoder::node).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodingError {
    /// The input geometry is structurally invalid.
    #[error("malformed geometry: {0}")]
    Malformed(#[from] MalformedGeometryError),
    /// The primary noder failed with a non-robustness error; no retry.
    #[error("noding failed: {0}")]
    Noder(NoderError),
    /// Both the primary and the fallback noder failed.
    #[error("noding failed after fallback (primary: {primary}; fallback: {fallback})")]
    Unrecoverable {
        /// Failure of the primary strategy.
        primary: NoderError,
        /// Failure of the fallback strategy.
        fallback: NoderError,
    },
}

/// Error returned when assembling a graph from explicit parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An adjacency refers to an id outside the node list.
    #[error("node {node} is adjacent to unknown node {neighbor}")]
    UnknownNeighbor {
        /// Node holding the adjacency.
        node: NodeId,
        /// The dangling id.
        neighbor: NodeId,
    },
}

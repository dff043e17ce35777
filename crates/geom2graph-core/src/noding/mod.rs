// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Noding: splitting line segments so that no two interiors cross.
//!
//! Contract for every [`Noder`]:
//! - Output segment strings have at least two coordinates and no consecutive
//!   planar repeats.
//! - Interiors of output segments pairwise intersect only at shared endpoints.
//! - Numerical degeneracy is reported as [`NoderError::Robustness`] so the
//!   orchestrator can retry with a more tolerant strategy.

mod geometry_noder;
mod index;
mod iterated;
mod segment_string;
mod snapping;

pub use geometry_noder::{extract_segment_strings, node, GeometryNoder};
pub use iterated::{IteratedNoder, DEFAULT_MAX_ITERATIONS};
pub use segment_string::SegmentString;
pub use snapping::SnappingNoder;

use crate::error::NoderError;

/// A noding strategy.
///
/// Implementations receive every input segment string at once and return the
/// fully noded set.
pub trait Noder: Send + Sync {
    /// Computes the noded segment strings for `segments`.
    fn compute_nodes(&self, segments: Vec<SegmentString>)
        -> Result<Vec<SegmentString>, NoderError>;
}

pub(crate) fn ensure_finite(segments: &[SegmentString]) -> Result<(), NoderError> {
    for (index, segment) in segments.iter().enumerate() {
        if let Some(c) = segment.coords().iter().find(|c| !c.is_finite()) {
            return Err(NoderError::InvalidInput(format!(
                "segment string #{index} has a non-finite coordinate ({}, {})",
                c.x, c.y
            )));
        }
    }
    Ok(())
}

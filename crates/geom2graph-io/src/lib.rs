// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text formats for geom2graph.
//!
//! This crate provides:
//! - WKT input (one geometry per line) and WKT output.
//! - TGF ("trivial graph format") output and input for `GeometryGraph`.
//! - JSON output of the node list.
//!
//! # Design
//!
//! Formatting lives here so `geom2graph-core` stays free of text concerns. The
//! core makes no formatting decisions; in particular, edge direction is
//! deduplicated by the TGF writer, not by the graph.

mod error;
mod json;
mod tgf;
mod wkt;

pub use error::ReadError;
pub use json::write_json;
pub use tgf::{read_tgf, write_tgf};
pub use wkt::{read_wkt, write_wkt, WktReader};

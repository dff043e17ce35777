// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::io::Write;

use geom2graph_core::GeometryGraph;

/// Writes the node list of `graph` as pretty-printed JSON.
///
/// Each node serializes as `{"id", "coord", "adjacencies"}`; absent `z`/`m`
/// ordinates are omitted.
pub fn write_json<W: Write>(graph: &GeometryGraph, mut out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut out, graph.nodes())?;
    writeln!(out).and_then(|()| out.flush()).map_err(serde_json::Error::io)
}

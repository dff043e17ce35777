// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The two conversions the binary performs.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use geom2graph_core::{Geometry, GeometryGraph, GeometryNoder, PrecisionModel, SnappingNoder};
use geom2graph_io::{read_tgf, write_json, write_tgf, write_wkt, WktReader};
use tracing::{debug, info};

use crate::cli::{Args, OutputFormat};
use crate::config::Geom2GraphConfig;

/// Effective options after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Precision model of the input.
    pub precision: PrecisionModel,
    /// Explicit snapping tolerance, if any.
    pub tolerance: Option<f64>,
    /// Graph output format.
    pub format: OutputFormat,
}

impl Settings {
    /// Flags win over `config`; anything unset falls back to the defaults.
    pub fn resolve(args: &Args, config: &Geom2GraphConfig) -> Result<Self> {
        let precision = match args.precision_scale.or(config.precision_scale) {
            Some(scale) if scale.is_finite() && scale > 0.0 => PrecisionModel::fixed(scale),
            Some(scale) => bail!("precision scale must be finite and positive, got {scale}"),
            None => PrecisionModel::Floating,
        };
        let tolerance = args.tolerance.or(config.tolerance);
        if let Some(t) = tolerance {
            if !(t.is_finite() && t >= 0.0) {
                bail!("tolerance must be finite and non-negative, got {t}");
            }
        }
        let format = args.format.or(config.format).unwrap_or_default();
        Ok(Self { precision, tolerance, format })
    }
}

/// Reads WKT (one geometry per line), nodes everything together, and writes
/// the resulting graph.
pub fn geom2graph<R: BufRead, W: Write>(input: R, output: W, settings: &Settings) -> Result<()> {
    let members = WktReader::new(input)
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read WKT input")?;
    info!(geometries = members.len(), "read input");

    let mut noder = GeometryNoder::new(settings.precision);
    if let Some(tolerance) = settings.tolerance {
        debug!(tolerance, "using snapping noder");
        noder = noder.with_noder(Box::new(SnappingNoder::new(tolerance)));
    }
    let noded = noder
        .node(&Geometry::GeometryCollection(members))
        .context("failed to node input geometries")?;
    let graph = GeometryGraph::build(&noded);
    info!(nodes = graph.len(), edges = graph.edge_count(), "built graph");

    match settings.format {
        OutputFormat::Tgf => write_tgf(&graph, output).context("failed to write TGF")?,
        OutputFormat::Json => write_json(&graph, output).context("failed to write JSON")?,
    }
    Ok(())
}

/// Reads a TGF graph and writes one WKT geometry per line: an edge per
/// `LINESTRING`, then a `POINT` per isolated node.
pub fn graph2geom<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let graph = read_tgf(input).context("failed to read TGF input")?;
    info!(nodes = graph.len(), edges = graph.edge_count(), "read graph");

    if let Geometry::GeometryCollection(members) = graph.to_geometry() {
        for member in &members {
            writeln!(output, "{}", write_wkt(member))?;
        }
    }
    output.flush()?;
    Ok(())
}

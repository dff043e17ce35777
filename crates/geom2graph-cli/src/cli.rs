// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Convert WKT geometries into a noded planar graph, or a graph back into WKT.
#[derive(Parser, Debug)]
#[command(name = "geom2graph", author, version, about, long_about = None)]
pub struct Args {
    /// Input file; reads stdin when omitted or `-`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted or `-`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Node with a snapping noder using this snap distance.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Round computed nodes to a fixed grid of `1/scale` units.
    #[arg(long)]
    pub precision_scale: Option<f64>,

    /// Graph output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reverse mode: read a TGF graph and write its edges and isolated nodes as WKT.
    #[arg(long)]
    pub graph2geom: bool,

    /// JSON file with defaults for `tolerance`, `precision_scale`, and `format`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log noding decisions at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the graph is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Trivial Graph Format with WKT point labels.
    #[default]
    Tgf,
    /// Pretty-printed JSON node list.
    Json,
}

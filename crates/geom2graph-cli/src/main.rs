// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `geom2graph` entrypoint.
//!
//! Reads WKT geometries (one per line), nodes them so every crossing becomes a
//! shared vertex, and writes the resulting planar graph as TGF or JSON. With
//! `--graph2geom` the direction is reversed: a TGF graph is written back out as
//! WKT.
//!
//! # Usage
//! ```text
//! geom2graph [--input FILE] [--output FILE] [--tolerance T] [--precision-scale S]
//!            [--format tgf|json] [--graph2geom] [--config FILE] [--verbose]
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides the default `warn` level.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod pipeline;

use cli::Args;
use config::{load_config, FileConfigStore, Geom2GraphConfig};
use pipeline::{geom2graph, graph2geom, Settings};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;

    if args.graph2geom {
        return graph2geom(input, output);
    }

    let config = match &args.config {
        Some(path) => load_config(&FileConfigStore::new(path))
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Geom2GraphConfig::default(),
    };
    let settings = Settings::resolve(&args, &config)?;
    geom2graph(input, output, &settings)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `None` and `-` both mean the standard stream.
fn file_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match file_path(path) {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match file_path(path) {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("failed to create {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
